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

#![cfg(test)]

use crate::{
    mock::{
        ExtBuilder, MockOnOracleCreated, OracleCommons, Runtime, RuntimeOrigin, System, Timestamp,
    },
    Error, Event, OracleCommonsPalletApi, OracleCounter, Oracles,
};
use frame_support::{assert_err, assert_noop, assert_ok};
use futurum_primitives::{
    constants::{mock::DefaultGracePeriod, MILLISECS_PER_DAY},
    types::{AccountIdTest, OracleStatus},
};
use sp_runtime::ArithmeticError;
use test_case::test_case;

const ALICE: AccountIdTest = 0;
const BOB: AccountIdTest = 1;
const CHARLIE: AccountIdTest = 2;

#[test]
fn create_oracle_issues_sequential_ids() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        assert_eq!(OracleCommons::latest_oracle_id().unwrap(), 0);
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(BOB)));
        assert_eq!(OracleCommons::latest_oracle_id().unwrap(), 1);
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        assert_eq!(OracleCommons::latest_oracle_id().unwrap(), 2);
        assert_eq!(OracleCommons::oracle(&1).unwrap().owner, BOB);
    });
}

#[test]
fn create_oracle_sets_up_open_oracle_with_default_grace_period() {
    ExtBuilder::default().build().execute_with(|| {
        let now = 3 * MILLISECS_PER_DAY;
        Timestamp::set_timestamp(now);
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        let oracle = OracleCommons::oracle(&0).unwrap();
        let grace_period_ends = now + DefaultGracePeriod::get();
        assert_eq!(oracle.owner, ALICE);
        assert_eq!(oracle.grace_period_ends, grace_period_ends);
        assert_eq!(oracle.status, OracleStatus::Open);
        System::assert_last_event(
            Event::OracleCreated { oracle_id: 0, owner: ALICE, grace_period_ends }.into(),
        );
    });
}

#[test]
fn create_oracle_announces_every_new_id() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(BOB)));
        assert_eq!(MockOnOracleCreated::created_oracles(), vec![(0, ALICE), (1, BOB)]);
    });
}

#[test]
fn create_oracle_fails_on_id_overflow() {
    ExtBuilder::default().build().execute_with(|| {
        OracleCounter::<Runtime>::put(u64::MAX);
        assert_noop!(
            OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)),
            ArithmeticError::Overflow
        );
    });
}

#[test]
fn latest_oracle_id_fails_if_there_are_no_oracles() {
    ExtBuilder::default().build().execute_with(|| {
        assert_err!(OracleCommons::latest_oracle_id(), Error::<Runtime>::NoOracleHasBeenCreated);
    });
}

#[test]
fn oracle_fails_if_oracle_does_not_exist() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(OracleCommons::oracle(&0), Error::<Runtime>::OracleDoesNotExist);
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        assert_noop!(OracleCommons::oracle(&1), Error::<Runtime>::OracleDoesNotExist);
    });
}

#[test_case(0; "in the past")]
#[test_case(1_000; "in the near future")]
#[test_case(u64::MAX; "far future")]
fn update_grace_period_ends_accepts_any_moment(grace_period_ends: u64) {
    ExtBuilder::default().build().execute_with(|| {
        Timestamp::set_timestamp(500);
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        assert_ok!(OracleCommons::update_grace_period_ends(
            RuntimeOrigin::signed(ALICE),
            0,
            grace_period_ends
        ));
        assert_eq!(OracleCommons::oracle(&0).unwrap().grace_period_ends, grace_period_ends);
        System::assert_last_event(
            Event::GracePeriodUpdated { oracle_id: 0, grace_period_ends }.into(),
        );
    });
}

#[test]
fn update_grace_period_ends_fails_if_caller_is_not_owner() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        assert_noop!(
            OracleCommons::update_grace_period_ends(RuntimeOrigin::signed(BOB), 0, 0),
            Error::<Runtime>::CallerNotOracleOwner
        );
    });
}

#[test]
fn update_grace_period_ends_fails_if_oracle_does_not_exist() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            OracleCommons::update_grace_period_ends(RuntimeOrigin::signed(ALICE), 0, 0),
            Error::<Runtime>::OracleDoesNotExist
        );
    });
}

#[test]
fn change_oracle_owner_works() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        assert_ok!(OracleCommons::change_oracle_owner(RuntimeOrigin::signed(ALICE), 0, BOB));
        assert_eq!(OracleCommons::oracle(&0).unwrap().owner, BOB);
        System::assert_last_event(
            Event::OracleOwnerChanged { oracle_id: 0, old_owner: ALICE, new_owner: BOB }.into(),
        );

        // The previous owner lost all privileges.
        assert_noop!(
            OracleCommons::change_oracle_owner(RuntimeOrigin::signed(ALICE), 0, CHARLIE),
            Error::<Runtime>::CallerNotOracleOwner
        );
        assert_ok!(OracleCommons::update_grace_period_ends(RuntimeOrigin::signed(BOB), 0, 1));
    });
}

#[test]
fn change_oracle_owner_fails_if_caller_is_not_owner() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        assert_noop!(
            OracleCommons::change_oracle_owner(RuntimeOrigin::signed(BOB), 0, BOB),
            Error::<Runtime>::CallerNotOracleOwner
        );
    });
}

#[test]
fn finish_oracle_is_irreversible() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        assert_ok!(<OracleCommons as OracleCommonsPalletApi>::finish_oracle(&0));
        assert!(OracleCommons::oracle(&0).unwrap().is_finished());
        assert_noop!(
            <OracleCommons as OracleCommonsPalletApi>::finish_oracle(&0),
            Error::<Runtime>::OracleAlreadyFinished
        );
    });
}

#[test]
fn finish_oracle_fails_if_oracle_does_not_exist() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            <OracleCommons as OracleCommonsPalletApi>::finish_oracle(&3),
            Error::<Runtime>::OracleDoesNotExist
        );
    });
}

#[test]
fn mutate_oracle_succeeds_if_closure_succeeds() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        assert_ok!(OracleCommons::mutate_oracle(&0, |oracle| {
            oracle.owner = CHARLIE;
            Ok(())
        }));
        assert_eq!(Oracles::<Runtime>::get(0).unwrap().owner, CHARLIE);
    });
}

#[test]
fn mutate_oracle_is_noop_if_closure_fails() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(OracleCommons::create_oracle(RuntimeOrigin::signed(ALICE)));
        assert_noop!(
            // We change the oracle to check that `mutate_oracle` is actually no-op.
            OracleCommons::mutate_oracle(&0, |oracle| {
                oracle.owner = CHARLIE;
                Err("foo".into())
            }),
            "foo"
        );
        assert_eq!(OracleCommons::oracle(&0).unwrap().owner, ALICE);
    });
}
