//! Name-level context for building name auction instructions from derived address data.

use name_auction_interface::{
    config::{
        CLOCK_SYSVAR_ID,
        RENT_SYSVAR_ID,
        SYSTEM_PROGRAM_ID,
        TOKEN_PROGRAM_ID,
    },
    instructions::{
        build_instruction,
        Claim,
        ClaimInstructionData,
        CreateAuction,
        CreateAuctionInstructionData,
        CreateReverse,
        CreateReverseInstructionData,
        CreateV2,
        CreateV2InstructionData,
        EndAuction,
        EndAuctionInstructionData,
        Init,
        InitInstructionData,
        LegacyClaim,
        LegacyClaimInstructionData,
        LegacyCreateAuction,
        LegacyCreateAuctionInstructionData,
        LegacyResellInstructionData,
        Operation,
        Resell,
        ResellInstructionData,
        TakeBack,
    },
    seeds::{
        find_auction_account,
        find_auction_state,
        find_bidder_pot,
        find_central_state,
        find_name_account,
        find_reselling_state,
        find_reverse_lookup_account,
        hash_name,
    },
    state::name_auction::NameAuction,
    NameAuctionResult,
    ProgramConfig,
};
use solana_address::Address;
use solana_instruction::Instruction;

/// The bidder side of a claim. The destination token account is resolved separately since it
/// depends on whether the auction is a resale.
#[derive(Clone, Debug)]
pub struct ClaimParams {
    pub fee_payer: Address,
    pub bidder_wallet: Address,
    pub bidder_pot_token: Address,
    /// A FIDA token account of the seller used for fee discounts. Ignored by first auctions.
    pub discount_account: Option<Address>,
    pub buy_now: Address,
    pub referrer: Option<Address>,
}

/// The buy now side of a resale: the price and the auction program account that enforces it.
#[derive(Clone, Copy, Debug)]
pub struct BuyNow {
    pub max_price: u64,
    pub account: Address,
}

/// A struct containing every address derived from a name under a parent domain.
///
/// Implements helper methods for building all program instructions that target the name.
#[derive(Clone, Debug)]
pub struct NameContext {
    pub config: ProgramConfig,
    pub name: String,
    pub hashed_name: [u8; 32],
    pub parent: Address,
    pub name_account: Address,
    pub reverse_lookup: Address,
    /// The program's auction state PDA for the name.
    pub state: Address,
    pub reselling_state: Address,
    /// The auction program account a name is auctioned through, for deployments that derive it.
    pub auction: Address,
}

impl NameContext {
    /// Derives the context of `name` directly under the configured root domain.
    pub fn new(config: &ProgramConfig, name: &str) -> Self {
        Self::new_with_parent(config, name, config.root_domain)
    }

    pub fn new_with_parent(config: &ProgramConfig, name: &str, parent: Address) -> Self {
        let hashed_name = hash_name(name);
        let (name_account, _) = find_name_account(
            &config.naming_service_program,
            &hashed_name,
            None,
            Some(&parent),
        );
        let (state, _) = find_auction_state(&config.program_id, &name_account);
        let (reselling_state, _) = find_reselling_state(&config.program_id, &name_account);
        let (auction, _) = find_auction_account(&config.auction_program, &name_account);

        Self {
            config: config.clone(),
            name: name.to_string(),
            hashed_name,
            parent,
            reverse_lookup: find_reverse_lookup_account(config, &name_account),
            name_account,
            state,
            reselling_state,
            auction,
        }
    }

    fn build(&self, operation: Operation) -> NameAuctionResult<Instruction> {
        build_instruction(&operation, &self.config)
    }

    pub fn create_auction(
        &self,
        fee_payer: Address,
        quote_mint: Address,
    ) -> NameAuctionResult<Instruction> {
        self.build(Operation::CreateAuction {
            accounts: CreateAuction {
                rent_sysvar: RENT_SYSVAR_ID,
                clock_sysvar: CLOCK_SYSVAR_ID,
                naming_service_program: self.config.naming_service_program,
                root_domain: self.config.root_domain,
                name_account: self.name_account,
                reverse_lookup: self.reverse_lookup,
                system_program: SYSTEM_PROGRAM_ID,
                auction_program: self.config.auction_program,
                auction: self.auction,
                central_state: self.config.central_state,
                state: self.state,
                fee_payer,
                quote_mint,
                price_oracle: self.config.price_oracle,
            },
            data: CreateAuctionInstructionData {
                name: self.name.clone(),
            },
        })
    }

    /// Legacy auctions live in a freshly allocated `auction` account rather than a PDA.
    pub fn legacy_create_auction(
        &self,
        fee_payer: Address,
        quote_mint: Address,
        auction: Address,
    ) -> NameAuctionResult<Instruction> {
        self.build(Operation::LegacyCreateAuction {
            accounts: LegacyCreateAuction {
                rent_sysvar: RENT_SYSVAR_ID,
                clock_sysvar: CLOCK_SYSVAR_ID,
                naming_service_program: self.config.naming_service_program,
                root_domain: self.config.root_domain,
                name_account: self.name_account,
                system_program: SYSTEM_PROGRAM_ID,
                auction_program: self.config.auction_program,
                auction,
                state: self.state,
                fee_payer,
                quote_mint,
            },
            data: LegacyCreateAuctionInstructionData {
                hashed_name: self.hashed_name,
            },
        })
    }

    pub fn claim(
        &self,
        auction_state: &NameAuction,
        params: &ClaimParams,
        destination_token: Address,
        space: u32,
    ) -> NameAuctionResult<Instruction> {
        let auction = auction_state.auction_account;
        let (bidder_pot, _) =
            find_bidder_pot(&self.config.auction_program, &auction, &params.bidder_wallet);

        self.build(Operation::Claim {
            accounts: Claim {
                clock_sysvar: CLOCK_SYSVAR_ID,
                token_program: TOKEN_PROGRAM_ID,
                naming_service_program: self.config.naming_service_program,
                root_domain: self.config.root_domain,
                name_account: self.name_account,
                system_program: SYSTEM_PROGRAM_ID,
                auction_program: self.config.auction_program,
                auction,
                central_state: self.config.central_state,
                state: self.state,
                reselling_state: self.reselling_state,
                fee_payer: params.fee_payer,
                quote_mint: auction_state.quote_mint,
                destination_token,
                bidder_wallet: params.bidder_wallet,
                bidder_pot,
                bidder_pot_token: params.bidder_pot_token,
                quote_vault: self.config.quote_vault(&auction_state.quote_mint),
                discount_account: params.discount_account.unwrap_or_default(),
                buy_now: params.buy_now,
                sol_vault: self.config.sol_vault,
                referrer: params.referrer,
                is_resell: auction_state.is_resale(),
            },
            data: ClaimInstructionData {
                hashed_name: self.hashed_name,
                space,
            },
        })
    }

    /// `lamports` funds the name account the claim creates.
    pub fn legacy_claim(
        &self,
        auction_state: &NameAuction,
        params: &ClaimParams,
        lamports: u64,
        space: u32,
    ) -> NameAuctionResult<Instruction> {
        let auction = auction_state.auction_account;
        let (bidder_pot, _) =
            find_bidder_pot(&self.config.auction_program, &auction, &params.bidder_wallet);

        self.build(Operation::LegacyClaim {
            accounts: LegacyClaim {
                token_program: TOKEN_PROGRAM_ID,
                clock_sysvar: CLOCK_SYSVAR_ID,
                naming_service_program: self.config.naming_service_program,
                root_domain: self.config.root_domain,
                name_account: self.name_account,
                system_program: SYSTEM_PROGRAM_ID,
                auction_program: self.config.auction_program,
                auction,
                central_state: self.config.central_state,
                state: self.state,
                fee_payer: params.fee_payer,
                quote_mint: auction_state.quote_mint,
                destination_token: self.config.quote_vault(&auction_state.quote_mint),
                bidder_wallet: params.bidder_wallet,
                bidder_pot,
                bidder_pot_token: params.bidder_pot_token,
            },
            data: LegacyClaimInstructionData {
                hashed_name: self.hashed_name,
                lamports,
                space,
            },
        })
    }

    fn resell_accounts(
        &self,
        name_owner: Address,
        fee_payer: Address,
        destination_token: Address,
        buy_now: Option<Address>,
    ) -> Resell {
        Resell {
            rent_sysvar: RENT_SYSVAR_ID,
            clock_sysvar: CLOCK_SYSVAR_ID,
            naming_service_program: self.config.naming_service_program,
            root_domain: self.config.root_domain,
            name_account: self.name_account,
            name_owner,
            reverse_lookup: self.reverse_lookup,
            system_program: SYSTEM_PROGRAM_ID,
            auction_program: self.config.auction_program,
            auction: self.auction,
            central_state: self.config.central_state,
            state: self.state,
            reselling_state: self.reselling_state,
            destination_token,
            fee_payer,
            buy_now,
        }
    }

    /// Puts an owned domain back up for auction. Proceeds go to `destination_token`.
    pub fn resell(
        &self,
        name_owner: Address,
        fee_payer: Address,
        destination_token: Address,
        minimum_price: u64,
        end_auction_at: u64,
        buy_now: Option<BuyNow>,
    ) -> NameAuctionResult<Instruction> {
        self.build(Operation::Resell {
            accounts: self.resell_accounts(
                name_owner,
                fee_payer,
                destination_token,
                buy_now.map(|b| b.account),
            ),
            data: ResellInstructionData {
                name: self.name.clone(),
                minimum_price,
                end_auction_at,
                max_price: buy_now.map(|b| b.max_price),
            },
        })
    }

    pub fn legacy_resell(
        &self,
        name_owner: Address,
        fee_payer: Address,
        destination_token: Address,
        minimum_price: u64,
    ) -> NameAuctionResult<Instruction> {
        self.build(Operation::LegacyResell {
            accounts: self.resell_accounts(name_owner, fee_payer, destination_token, None),
            data: LegacyResellInstructionData {
                name: self.name.clone(),
                minimum_price,
            },
        })
    }

    /// Creates the reverse lookup of this name. Subdomains pass their parent's owner, who must
    /// sign.
    pub fn create_reverse(
        &self,
        fee_payer: Address,
        parent_name_owner: Option<Address>,
    ) -> NameAuctionResult<Instruction> {
        let parent_name = (self.parent != self.config.root_domain).then_some(self.parent);
        self.build(Operation::CreateReverse {
            accounts: CreateReverse {
                rent_sysvar: RENT_SYSVAR_ID,
                naming_service_program: self.config.naming_service_program,
                root_domain: self.config.root_domain,
                reverse_lookup: self.reverse_lookup,
                central_state: self.config.central_state,
                fee_payer,
                parent_name,
                parent_name_owner,
            },
            data: CreateReverseInstructionData {
                name: self.name.clone(),
            },
        })
    }

    pub fn end_auction(
        &self,
        auction_creator: Address,
        destination_token: Address,
    ) -> NameAuctionResult<Instruction> {
        self.build(Operation::EndAuction {
            accounts: EndAuction {
                clock_sysvar: CLOCK_SYSVAR_ID,
                naming_service_program: self.config.naming_service_program,
                root_domain: self.config.root_domain,
                name_account: self.name_account,
                auction_program: self.config.auction_program,
                auction: self.auction,
                central_state: self.config.central_state,
                state: self.state,
                auction_creator,
                reselling_state: self.reselling_state,
                destination_token,
                sol_vault: self.config.sol_vault,
                system_program: SYSTEM_PROGRAM_ID,
            },
            data: EndAuctionInstructionData {
                name: self.name.clone(),
            },
        })
    }

    /// Buys the name outright at the oracle-priced fixed price, paid in FIDA.
    pub fn create_v2(
        &self,
        buyer: Address,
        buyer_token_source: Address,
        space: u32,
    ) -> NameAuctionResult<Instruction> {
        self.build(Operation::CreateV2 {
            accounts: CreateV2 {
                rent_sysvar: RENT_SYSVAR_ID,
                naming_service_program: self.config.naming_service_program,
                root_domain: self.config.root_domain,
                name_account: self.name_account,
                reverse_lookup: self.reverse_lookup,
                system_program: SYSTEM_PROGRAM_ID,
                central_state: self.config.central_state,
                buyer,
                buyer_token_source,
                price_oracle: self.config.price_oracle,
                quote_vault: self.config.fida_vault,
                token_program: TOKEN_PROGRAM_ID,
                state: self.state,
            },
            data: CreateV2InstructionData {
                name: self.name.clone(),
                space,
            },
        })
    }

    pub fn take_back(&self) -> NameAuctionResult<Instruction> {
        self.build(Operation::TakeBack {
            accounts: TakeBack {
                admin: self.config.admin,
                naming_service_program: self.config.naming_service_program,
                name_account: self.name_account,
                central_state: self.config.central_state,
                root_domain: self.config.root_domain,
            },
        })
    }
}

/// Initializes the program's central state. Only needed once per deployment.
pub fn init_central_state(
    config: &ProgramConfig,
    fee_payer: Address,
) -> NameAuctionResult<Instruction> {
    let (central_state, state_nonce) = find_central_state(&config.program_id);
    build_instruction(
        &Operation::Init {
            accounts: Init {
                state: central_state,
                system_program: SYSTEM_PROGRAM_ID,
                fee_payer,
                rent_sysvar: RENT_SYSVAR_ID,
            },
            data: InitInstructionData { state_nonce },
        },
        config,
    )
}
