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
use futurum_primitives::constants::CLAIM_TOKEN_UNIT;

struct Product {
    oracle_id: OracleId,
    donations: [(Account, Balance); 2],
    numerators: [Balance; 2],
}

impl Product {
    fn total(&self) -> Balance {
        self.donations.iter().map(|(_, amount)| amount).sum()
    }

    fn denominator(&self) -> Balance {
        self.numerators.iter().sum()
    }
}

/// Moves `amount` of the first customer's claim tokens of `oracle_id` to all other customers.
fn transfer_some_claims(oracle_id: OracleId, customers: &[Account], amount: Balance) {
    let first = customers[0];
    for to in customers[1..].iter() {
        assert_ok!(BidOnAddresses::transfer_claim(
            first.signed(),
            first.id(),
            to.id(),
            claim_id(oracle_id, &first),
            amount
        ));
    }
}

#[test]
fn two_oracles_two_donors_two_customers() {
    ExtBuilder::build().execute_with(|| {
        let owner = Account::new(ALICE);
        let customers = [Account::new(BOB), Account::new(CHARLIE)];
        let donors = [Account::new(DAVE), Account::new(EVE)];
        let oracle_0 = create_oracle(&owner);
        let oracle_1 = create_oracle(&owner);
        assert_eq!(<BidOnAddresses as RedemptionApi>::payout_denominator(oracle_0), 0);
        assert_eq!(<BidOnAddresses as RedemptionApi>::payout_denominator(oracle_1), 0);

        let products = [
            Product {
                oracle_id: oracle_0,
                donations: [(donors[0], 10_000_000_000), (donors[1], 1_000_000_000_000)],
                numerators: [45, 60],
            },
            Product {
                oracle_id: oracle_1,
                donations: [(donors[0], 20_000_000_000), (donors[1], 2_000_000_000_000)],
                numerators: [33, 90],
            },
        ];

        for customer in customers.iter() {
            register(oracle_0, &[*customer]);
            register(oracle_1, &[*customer]);
        }

        for product in products.iter() {
            for (donor, amount) in product.donations.iter() {
                donate(product.oracle_id, donor, COLLATERAL, *amount);
            }
            // Transfers before and after the report complicate the bookkeeping.
            transfer_some_claims(product.oracle_id, &customers, 23 * CLAIM_TOKEN_UNIT / 10);
            for (customer, numerator) in customers.iter().zip(product.numerators.iter()) {
                report(product.oracle_id, &owner, &[(*customer, *numerator)]);
            }
            assert_eq!(
                <BidOnAddresses as RedemptionApi>::payout_denominator(product.oracle_id),
                0
            );
            finish(product.oracle_id, &owner);
            transfer_some_claims(product.oracle_id, &customers, 12 * CLAIM_TOKEN_UNIT / 10);
        }

        for product in products.iter() {
            let denominator = product.denominator();
            assert_eq!(
                <BidOnAddresses as RedemptionApi>::payout_denominator(product.oracle_id),
                denominator
            );

            for (customer, numerator) in customers.iter().zip(product.numerators.iter()) {
                let owing = collateral_owing(COLLATERAL, product.oracle_id, customer, customer);
                let balance = customer.claim_balance(product.oracle_id, customer);
                assert_approx!(
                    owing,
                    expected_payout(product.total(), *numerator, balance, denominator),
                    1
                );

                let old_balance = customer.free_balance(COLLATERAL);
                assert_ok!(BidOnAddresses::withdraw_collateral(
                    customer.signed(),
                    COLLATERAL,
                    product.oracle_id,
                    customer.id()
                ));
                assert_eq!(customer.free_balance(COLLATERAL) - old_balance, owing);

                // Should do nothing.
                assert_ok!(BidOnAddresses::withdraw_collateral(
                    customer.signed(),
                    COLLATERAL,
                    product.oracle_id,
                    customer.id()
                ));
                assert_eq!(customer.free_balance(COLLATERAL) - old_balance, owing);
                assert_eq!(collateral_owing(COLLATERAL, product.oracle_id, customer, customer), 0);
            }

            // Charlie holds Bob's tokens sold before and after the report.
            let bob = customers[0];
            let charlie = customers[1];
            assert_eq!(charlie.claim_balance(product.oracle_id, &bob), 35 * CLAIM_TOKEN_UNIT / 10);
            let owing = collateral_owing(COLLATERAL, product.oracle_id, &bob, &charlie);
            assert_eq!(
                owing,
                expected_payout(
                    product.total(),
                    product.numerators[0],
                    35 * CLAIM_TOKEN_UNIT / 10,
                    denominator
                )
            );
            assert_ok!(BidOnAddresses::withdraw_collateral(
                charlie.signed(),
                COLLATERAL,
                product.oracle_id,
                bob.id()
            ));

            // Everybody was paid and rounding losses remain in the pot.
            let pot = Currencies::free_balance(
                COLLATERAL,
                &BidOnAddresses::pot_account(product.oracle_id),
            );
            assert!(pot < 3);
            assert_eq!(
                CollateralTotals::<Runtime>::get(product.oracle_id, COLLATERAL),
                product.total()
            );
        }
    });
}
