use multiversx_sc::proxy_imports::*;

use crate::types::Loan;

pub struct CollateralizedLoanProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CollateralizedLoanProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CollateralizedLoanProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CollateralizedLoanProxyMethods { wrapped_tx: tx }
    }
}

pub struct CollateralizedLoanProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> CollateralizedLoanProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> CollateralizedLoanProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> CollateralizedLoanProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn deposit_collateral_and_request_loan<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        interest_rate: Arg0,
        duration: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("depositCollateralAndRequestLoan")
            .argument(&interest_rate)
            .argument(&duration)
            .original_result()
    }

    pub fn fund_loan<Arg0: ProxyArg<u64>>(
        self,
        loan_id: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("fundLoan")
            .argument(&loan_id)
            .original_result()
    }

    pub fn repay_loan<Arg0: ProxyArg<u64>>(
        self,
        loan_id: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("repayLoan")
            .argument(&loan_id)
            .original_result()
    }

    pub fn claim_collateral<Arg0: ProxyArg<u64>>(
        self,
        loan_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimCollateral")
            .argument(&loan_id)
            .original_result()
    }

    pub fn get_loan<Arg0: ProxyArg<u64>>(
        self,
        loan_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Loan<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLoan")
            .argument(&loan_id)
            .original_result()
    }

    pub fn get_loan_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLoanCount")
            .original_result()
    }

    pub fn get_loans<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Loan<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLoans")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_borrower_loans<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        borrower: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBorrowerLoans")
            .argument(&borrower)
            .original_result()
    }

    pub fn get_required_repayment<Arg0: ProxyArg<u64>>(
        self,
        loan_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRequiredRepayment")
            .argument(&loan_id)
            .original_result()
    }
}
