//! Full round lifecycle: the two-holder acceptance scenario, gate blocking
//! across rounds, settlement bookkeeping and weather scaling.

use anchor_lang::prelude::*;

use super::common::*;
use crate::constants::*;
use crate::state::{
    DrawKind, DrawResult, HolderBalance, RewardStatus, SkipReason, WeatherKind,
};

#[test]
fn two_holder_round_trip() {
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();
    // 5000 tokens -> 5 tickets, 1000 tokens -> 1 ticket.
    let registry = registry_with(&[(a, 5_000), (b, 1_000)]);
    assert_eq!(registry.holders[0].tickets, 5);
    assert_eq!(registry.holders[1].tickets, 1);
    assert_eq!(registry.win_probability_bps(&a), Some(8_333));

    let mut lottery = running_lottery();
    let mut book = empty_book();
    lottery.record_claim(LAMPORTS_PER_SOL);

    // Guaranteed-win roll: exactly one pending reward appears.
    let result = lottery
        .execute_draw(&registry, &mut book, DrawKind::Scheduled, &winning_seed(), 100)
        .unwrap();
    let (reward_id, winner) = match result {
        DrawResult::Win {
            reward_id, winner, ..
        } => (reward_id, winner),
        other => panic!("expected a win, got {:?}", other),
    };
    assert_eq!(winner, a);
    assert_eq!(book.rewards.len(), 1);

    // No second reward until the first is confirmed, even with fresh funds.
    lottery.record_claim(LAMPORTS_PER_SOL);
    let blocked = lottery
        .execute_draw(&registry, &mut book, DrawKind::Scheduled, &winning_seed(), 200)
        .unwrap();
    assert_eq!(blocked, DrawResult::Skipped(SkipReason::RoundGateClosed));
    assert_eq!(book.rewards.len(), 1);

    // Confirm, then the next round goes through.
    assert!(book.confirm(reward_id, [9u8; 64]));
    if let Some(reward) = book.get(reward_id) {
        lottery.settle_confirmed(reward.amount);
    }
    let next = lottery
        .execute_draw(&registry, &mut book, DrawKind::Scheduled, &winning_seed(), 300)
        .unwrap();
    assert!(matches!(next, DrawResult::Win { .. }));
    assert_eq!(book.rewards.len(), 2);
}

#[test]
fn winner_frequencies_follow_five_to_one_tickets() {
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();
    let registry = registry_with(&[(a, 5_000), (b, 1_000)]);

    // 600 independent rounds whose rolls sweep the modulo space evenly.
    let mut a_wins = 0u32;
    let mut b_wins = 0u32;
    for roll in 0..600u64 {
        let mut lottery = running_lottery();
        let mut book = empty_book();
        lottery.record_claim(LAMPORTS_PER_SOL);
        let result = lottery
            .execute_draw(
                &registry,
                &mut book,
                DrawKind::Scheduled,
                &winning_seed_with_roll(roll),
                roll as i64,
            )
            .unwrap();
        match result {
            DrawResult::Win { winner, .. } if winner == a => a_wins += 1,
            DrawResult::Win { winner, .. } if winner == b => b_wins += 1,
            other => panic!("expected a win, got {:?}", other),
        }
    }
    assert_eq!(a_wins, 500);
    assert_eq!(b_wins, 100);
}

#[test]
fn failed_payout_blocks_until_retried_and_confirmed() {
    let registry = registry_with(&[(Pubkey::new_unique(), 5_000)]);
    let mut lottery = running_lottery();
    let mut book = empty_book();
    lottery.record_claim(LAMPORTS_PER_SOL);

    let reward_id = match lottery
        .execute_draw(&registry, &mut book, DrawKind::Scheduled, &winning_seed(), 0)
        .unwrap()
    {
        DrawResult::Win { reward_id, .. } => reward_id,
        other => panic!("expected a win, got {:?}", other),
    };

    assert!(book.fail(reward_id));
    lottery.record_claim(LAMPORTS_PER_SOL);
    let blocked = lottery
        .execute_draw(&registry, &mut book, DrawKind::Scheduled, &winning_seed(), 10)
        .unwrap();
    assert_eq!(blocked, DrawResult::Skipped(SkipReason::RoundGateClosed));

    // Retry goes back to Pending, still blocking.
    assert!(book.retry(reward_id));
    assert_eq!(book.get(reward_id).unwrap().status, RewardStatus::Pending);
    let still_blocked = lottery
        .execute_draw(&registry, &mut book, DrawKind::Scheduled, &winning_seed(), 20)
        .unwrap();
    assert_eq!(still_blocked, DrawResult::Skipped(SkipReason::RoundGateClosed));

    assert!(book.confirm(reward_id, [3u8; 64]));
    let unblocked = lottery
        .execute_draw(&registry, &mut book, DrawKind::Scheduled, &winning_seed(), 30)
        .unwrap();
    assert!(matches!(unblocked, DrawResult::Win { .. }));
}

#[test]
fn draws_skip_while_a_holder_snapshot_is_in_flight() {
    let mut lottery = running_lottery();
    let mut registry = registry_with(&[(Pubkey::new_unique(), 5_000)]);
    let mut book = empty_book();
    lottery.record_claim(LAMPORTS_PER_SOL);

    // First page landed, last page still pending.
    registry.begin_snapshot();
    registry
        .extend(vec![HolderBalance {
            wallet: Pubkey::new_unique(),
            token_balance: 5_000,
        }])
        .unwrap();
    let blocked = lottery
        .execute_draw(&registry, &mut book, DrawKind::Scheduled, &winning_seed(), 0)
        .unwrap();
    assert_eq!(blocked, DrawResult::Skipped(SkipReason::NoEligibleHolders));
    assert!(lottery.has_fresh_funds);

    registry.commit_snapshot(1);
    let drawn = lottery
        .execute_draw(&registry, &mut book, DrawKind::Scheduled, &winning_seed(), 2)
        .unwrap();
    assert!(matches!(drawn, DrawResult::Win { .. }));
}

#[test]
fn settlement_updates_pool_and_totals_once() {
    let registry = registry_with(&[(Pubkey::new_unique(), 5_000)]);
    let mut lottery = running_lottery();
    let mut book = empty_book();
    lottery.record_claim(LAMPORTS_PER_SOL);

    let (reward_id, prize) = match lottery
        .execute_draw(&registry, &mut book, DrawKind::Scheduled, &winning_seed(), 0)
        .unwrap()
    {
        DrawResult::Win {
            reward_id,
            prize_lamports,
            ..
        } => (reward_id, prize_lamports),
        other => panic!("expected a win, got {:?}", other),
    };

    assert!(book.confirm(reward_id, [5u8; 64]));
    lottery.settle_confirmed(prize);
    assert_eq!(lottery.pool_lamports, LAMPORTS_PER_SOL - prize);
    assert_eq!(lottery.stats.total_paid_lamports, prize);

    // Confirming again is a no-op and must not touch the totals.
    assert!(!book.confirm(reward_id, [6u8; 64]));
    assert_eq!(book.get(reward_id).unwrap().tx_ref, Some([5u8; 64]));
    assert_eq!(lottery.stats.total_paid_lamports, prize);
    assert_eq!(lottery.stats.rewards_confirmed, 1);
}

#[test]
fn storm_round_pays_three_times_the_sunny_round() {
    let registry = registry_with(&[(Pubkey::new_unique(), 5_000)]);
    let pool = 100 * LAMPORTS_PER_SOL;

    let prize_under = |kind: WeatherKind| {
        let mut lottery = running_lottery();
        lottery.weather.kind = kind;
        lottery.weather.multiplier_bps = kind.multiplier_bps();
        let mut book = empty_book();
        lottery.record_claim(pool);
        match lottery
            .execute_draw(&registry, &mut book, DrawKind::Scheduled, &winning_seed(), 0)
            .unwrap()
        {
            DrawResult::Win { prize_lamports, .. } => prize_lamports,
            other => panic!("expected a win, got {:?}", other),
        }
    };

    let sunny = prize_under(WeatherKind::Sunny);
    let storm = prize_under(WeatherKind::Storm);
    assert_eq!(storm, sunny * 3);
}

#[test]
fn weather_transitions_follow_seed_weights_and_rearm() {
    let mut lottery = running_lottery();

    // Rolls below 60 land Sunny, 60..85 Rainy, 85.. Storm.
    let sunny = lottery.transition_weather(&seed_with(&[(0, 10)]), 1_000);
    assert_eq!(sunny.kind, WeatherKind::Sunny);
    let rainy = lottery.transition_weather(&seed_with(&[(0, 60)]), 2_000);
    assert_eq!(rainy.kind, WeatherKind::Rainy);
    assert_eq!(rainy.multiplier_bps, RAINY_MULTIPLIER_BPS);
    let storm = lottery.transition_weather(&seed_with(&[(0, 90)]), 3_000);
    assert_eq!(storm.kind, WeatherKind::Storm);

    assert_eq!(storm.started_at, 3_000);
    assert!((WEATHER_INTERVAL_MIN..=WEATHER_INTERVAL_MAX).contains(&storm.duration_secs));
    assert_eq!(lottery.next_weather_ts, 3_000 + storm.duration_secs);
}

#[test]
fn weather_weights_hold_exactly_over_a_uniform_roll_sweep() {
    // 10_000 consecutive roll values cover every mod-100 residue class
    // exactly 100 times, so the counts must match the 60/25/15 table.
    let mut lottery = running_lottery();
    let mut counts = [0u32; 3];
    for r in 0..10_000u32 {
        let mut seed = [0u8; 32];
        seed[0..4].copy_from_slice(&r.to_le_bytes());
        match lottery.transition_weather(&seed, 0).kind {
            WeatherKind::Sunny => counts[0] += 1,
            WeatherKind::Rainy => counts[1] += 1,
            WeatherKind::Storm => counts[2] += 1,
        }
    }
    assert_eq!(counts, [6_000, 2_500, 1_500]);
}
