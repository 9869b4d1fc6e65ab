#![no_std]

multiversx_sc::imports!();

pub mod collateralized_loan_proxy;
pub mod types;

use types::{Loan, LoanStatus};

// ============================================================
// Constants
// ============================================================

/// Principal is a fixed multiple of the deposited collateral
const COLLATERAL_TO_LOAN_MULTIPLIER: u64 = 2;

/// interest_rate is an integer percentage of the principal
const INTEREST_DENOMINATOR: u64 = 100;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CollateralizedLoan {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        self.loan_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: depositCollateralAndRequestLoan
    // Locks the payment as collateral and opens a loan request
    // for twice that amount. Ids are sequential from 0 and
    // never reused.
    // ========================================================

    #[endpoint(depositCollateralAndRequestLoan)]
    #[payable("EGLD")]
    fn deposit_collateral_and_request_loan(&self, interest_rate: u64, duration: u64) -> u64 {
        let borrower = self.blockchain().get_caller();
        let collateral_amount = self.call_value().egld_value().clone_value();

        require!(
            collateral_amount > 0u64,
            "Collateral amount must be greater than 0"
        );

        let loan_amount = &collateral_amount * COLLATERAL_TO_LOAN_MULTIPLIER;
        let due_date = self.blockchain().get_block_timestamp() + duration;

        let loan_id = self.loan_count().get();
        let loan = Loan {
            borrower: borrower.clone(),
            lender: ManagedAddress::zero(),
            collateral_amount: collateral_amount.clone(),
            loan_amount: loan_amount.clone(),
            interest_rate,
            due_date,
            status: LoanStatus::Requested,
        };

        self.loans(loan_id).set(&loan);
        self.loan_count().set(loan_id + 1);
        self.borrower_loans(&borrower).push(&loan_id);

        // The collateral stays in contract custody until repayment or claim.
        self.loan_requested_event(
            loan_id,
            &borrower,
            &collateral_amount,
            &loan_amount,
            interest_rate,
            due_date,
        );

        loan_id
    }

    // ========================================================
    // ENDPOINT: fundLoan
    // Exact-match funding: the payment must equal the loan
    // amount, no change-making, no partial funding. The
    // principal is forwarded straight to the borrower.
    // ========================================================

    #[endpoint(fundLoan)]
    #[payable("EGLD")]
    fn fund_loan(&self, loan_id: u64) {
        require!(!self.loans(loan_id).is_empty(), "Loan does not exist");

        let mut loan = self.loans(loan_id).get();
        require!(
            loan.status == LoanStatus::Requested,
            "Loan already funded"
        );

        let payment = self.call_value().egld_value().clone_value();
        require!(payment == loan.loan_amount, "Incorrect loan amount");

        let lender = self.blockchain().get_caller();
        loan.lender = lender.clone();
        loan.status = LoanStatus::Funded;
        self.loans(loan_id).set(&loan);

        self.send().direct_egld(&loan.borrower, &payment);
        self.loan_funded_event(loan_id, &lender);
    }

    // ========================================================
    // ENDPOINT: repayLoan
    // Accepts exactly principal + truncated percent interest,
    // at any time before the collateral has been claimed.
    // Pays the lender and releases the collateral.
    // ========================================================

    #[endpoint(repayLoan)]
    #[payable("EGLD")]
    fn repay_loan(&self, loan_id: u64) {
        require!(!self.loans(loan_id).is_empty(), "Loan does not exist");

        let mut loan = self.loans(loan_id).get();
        require!(
            loan.status != LoanStatus::Requested,
            "Loan is not funded yet"
        );
        require!(loan.status != LoanStatus::Repaid, "Loan already repaid");
        require!(
            loan.status != LoanStatus::Defaulted,
            "Collateral already claimed"
        );

        let payment = self.call_value().egld_value().clone_value();
        let required = self.required_repayment(&loan);
        require!(payment == required, "Incorrect repayment amount");

        loan.status = LoanStatus::Repaid;
        self.loans(loan_id).set(&loan);

        self.send().direct_egld(&loan.lender, &payment);
        self.send().direct_egld(&loan.borrower, &loan.collateral_amount);
        self.loan_repaid_event(loan_id, &loan.borrower);
    }

    // ========================================================
    // ENDPOINT: claimCollateral
    // After the due date, an unrepaid loan's collateral is
    // forfeited to the lender. Marking the loan Defaulted
    // makes the claim terminal — a second claim, or a
    // repayment afterwards, is rejected.
    // ========================================================

    #[endpoint(claimCollateral)]
    fn claim_collateral(&self, loan_id: u64) {
        require!(!self.loans(loan_id).is_empty(), "Loan does not exist");

        let mut loan = self.loans(loan_id).get();
        let now = self.blockchain().get_block_timestamp();
        require!(now >= loan.due_date, "Loan is not due yet");

        let caller = self.blockchain().get_caller();
        require!(
            caller == loan.lender,
            "Only the lender can claim the collateral"
        );
        require!(loan.status != LoanStatus::Repaid, "Loan already repaid");
        require!(
            loan.status != LoanStatus::Defaulted,
            "Collateral already claimed"
        );

        loan.status = LoanStatus::Defaulted;
        self.loans(loan_id).set(&loan);

        self.send().direct_egld(&loan.lender, &loan.collateral_amount);
        self.collateral_claimed_event(loan_id, &loan.lender);
    }

    // ========================================================
    // INTERNAL: repayment formula
    // principal + floor(principal * rate / 100); BigUint
    // division truncates, so equal terms always price equally.
    // ========================================================

    fn required_repayment(&self, loan: &Loan<Self::Api>) -> BigUint {
        let interest = &loan.loan_amount * loan.interest_rate / INTEREST_DENOMINATOR;
        &loan.loan_amount + &interest
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getLoan)]
    fn get_loan(&self, loan_id: u64) -> Loan<Self::Api> {
        self.loans(loan_id).get()
    }

    #[view(getLoanCount)]
    fn get_loan_count(&self) -> u64 {
        self.loan_count().get()
    }

    #[view(getLoans)]
    fn get_loans(&self, from: u64, count: u64) -> MultiValueEncoded<Loan<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.loan_count().get();
        if from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for id in from..end {
            result.push(self.loans(id).get());
        }
        result
    }

    #[view(getBorrowerLoans)]
    fn get_borrower_loans(&self, borrower: &ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for loan_id in self.borrower_loans(borrower).iter() {
            result.push(loan_id);
        }
        result
    }

    #[view(getRequiredRepayment)]
    fn get_required_repayment(&self, loan_id: u64) -> BigUint {
        require!(!self.loans(loan_id).is_empty(), "Loan does not exist");
        let loan = self.loans(loan_id).get();
        self.required_repayment(&loan)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("loanRequested")]
    fn loan_requested_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] collateral_amount: &BigUint,
        #[indexed] loan_amount: &BigUint,
        #[indexed] interest_rate: u64,
        due_date: u64,
    );

    #[event("loanFunded")]
    fn loan_funded_event(&self, #[indexed] loan_id: u64, #[indexed] lender: &ManagedAddress);

    #[event("loanRepaid")]
    fn loan_repaid_event(&self, #[indexed] loan_id: u64, #[indexed] borrower: &ManagedAddress);

    #[event("collateralClaimed")]
    fn collateral_claimed_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] lender: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Registry ──

    /// Next loan id to issue; the first loan gets id 0.
    #[storage_mapper("loanCount")]
    fn loan_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("loans")]
    fn loans(&self, loan_id: u64) -> SingleValueMapper<Loan<Self::Api>>;

    // ── Per-borrower index; a borrower may hold any number of open loans ──

    #[storage_mapper("borrowerLoans")]
    fn borrower_loans(&self, borrower: &ManagedAddress) -> VecMapper<u64>;
}
