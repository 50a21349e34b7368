// Copyright 2025 Forecasting Technologies LTD.
//
// This file is part of Futurum.
//
// Futurum is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Futurum is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Futurum. If not, see <https://www.gnu.org/licenses/>.

use super::*;

#[test]
fn register_customer_works() {
    ExtBuilder::build().execute_with(|| {
        let owner = Account::new(ALICE);
        let customer = Account::new(BOB);
        let oracle_id = create_oracle(&owner);

        assert_ok!(BidOnAddresses::register_customer(customer.signed(), oracle_id));

        let claim_id = claim_id(oracle_id, &customer);
        let amount = InitialCustomerBalance::get();
        assert_eq!(customer.claim_balance(oracle_id, &customer), amount);
        assert_eq!(ClaimBalances::<Runtime>::get(claim_id, customer.id()), amount);
        assert!(Registrations::<Runtime>::contains_key(oracle_id, customer.id()));
        assert_eq!(ClaimOrigins::<Runtime>::get(claim_id), Some((oracle_id, customer.id())));
        System::assert_last_event(
            Event::CustomerRegistered { oracle_id, customer: customer.id(), claim_id, amount }
                .into(),
        );
    });
}

#[test]
fn register_customer_fails_on_second_registration() {
    ExtBuilder::build().execute_with(|| {
        let owner = Account::new(ALICE);
        let customer = Account::new(BOB);
        let oracle_id = create_oracle(&owner);
        register(oracle_id, &[customer]);

        assert_noop!(
            BidOnAddresses::register_customer(customer.signed(), oracle_id),
            Error::<Runtime>::CustomerAlreadyRegistered
        );
        assert_eq!(customer.claim_balance(oracle_id, &customer), InitialCustomerBalance::get());
    });
}

#[test]
fn register_customer_fails_if_oracle_does_not_exist() {
    ExtBuilder::build().execute_with(|| {
        let customer = Account::new(BOB);
        assert_noop!(
            BidOnAddresses::register_customer(customer.signed(), 0),
            frml_oracle_commons::Error::<Runtime>::OracleDoesNotExist
        );
    });
}

#[test]
fn register_customer_works_after_oracle_is_finished() {
    ExtBuilder::build().execute_with(|| {
        let owner = Account::new(ALICE);
        let customer = Account::new(BOB);
        let oracle_id = create_oracle(&owner);
        finish(oracle_id, &owner);

        assert_ok!(BidOnAddresses::register_customer(customer.signed(), oracle_id));
        assert_eq!(customer.claim_balance(oracle_id, &customer), InitialCustomerBalance::get());
    });
}

#[test]
fn register_customer_mints_a_separate_class_per_oracle_and_customer() {
    ExtBuilder::build().execute_with(|| {
        let owner = Account::new(ALICE);
        let bob = Account::new(BOB);
        let charlie = Account::new(CHARLIE);
        let oracle_0 = create_oracle(&owner);
        let oracle_1 = create_oracle(&owner);
        register(oracle_0, &[bob, charlie]);
        register(oracle_1, &[bob]);

        assert_ne!(claim_id(oracle_0, &bob), claim_id(oracle_0, &charlie));
        assert_ne!(claim_id(oracle_0, &bob), claim_id(oracle_1, &bob));
        assert_eq!(bob.claim_balance(oracle_0, &charlie), 0);
        assert_eq!(charlie.claim_balance(oracle_1, &charlie), 0);
        assert!(ClaimOrigins::<Runtime>::get(claim_id(oracle_1, &charlie)).is_none());
    });
}

#[test]
fn register_customer_keeps_claims_out_of_the_currency_ledger() {
    ExtBuilder::build().execute_with(|| {
        let owner = Account::new(ALICE);
        let customer = Account::new(BOB);
        let oracle_id = create_oracle(&owner);
        let accounts = orml_tokens::Accounts::<Runtime>::iter().count();
        let issuances = orml_tokens::TotalIssuance::<Runtime>::iter().count();

        register(oracle_id, &[customer]);

        assert_eq!(orml_tokens::Accounts::<Runtime>::iter().count(), accounts);
        assert_eq!(orml_tokens::TotalIssuance::<Runtime>::iter().count(), issuances);
        assert_eq!(customer.claim_balance(oracle_id, &customer), InitialCustomerBalance::get());
    });
}
