multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Loan Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoanStatus {
    /// Collateral deposited, waiting for a lender.
    Requested,
    /// Lender matched, principal paid out. Repay or default from here.
    Funded,
    /// Principal plus interest returned, collateral released. Terminal state.
    Repaid,
    /// Due date passed without repayment and the lender claimed the
    /// collateral. Terminal state; blocks any further claim or repayment.
    Defaulted,
}

// ============================================================
// Loan — the core registry record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Loan<M: ManagedTypeApi> {
    pub borrower: ManagedAddress<M>,
    /// Zero address until the loan is funded.
    pub lender: ManagedAddress<M>,
    pub collateral_amount: BigUint<M>,
    /// Fixed at request time: 2 × collateral_amount.
    pub loan_amount: BigUint<M>,
    /// Integer percentage (10 = 10%).
    pub interest_rate: u64,
    /// Block timestamp of the request plus the requested duration.
    pub due_date: u64,
    pub status: LoanStatus,
}
