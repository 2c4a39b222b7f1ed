//! auction-core - Binary Entry Point
//!
//! Runs a small demonstration auction over a hand-built pool and prints the
//! ledger and final team state. Real catalogs are loaded by external
//! collaborators; this binary only exercises the engine end to end.

use auction_core::{Auctioneer, LotStatus, Money, Player, Role, SetOrder, SquadPolicy, Team};

fn demo_teams() -> Vec<Team> {
    let purse = Money::from_major(120);
    ["Mumbai Mavericks", "Chennai Chargers", "Delhi Dynamos"]
        .into_iter()
        .map(|name| {
            Team::new(name, purse, Vec::new(), SquadPolicy::default())
                .expect("demo teams are validly configured")
        })
        .collect()
}

fn demo_pool() -> Vec<Player> {
    vec![
        Player::new("A Sharma", Role::Batter, "India", Money::from_major(2), 31)
            .with_caps(40, 90, 60)
            .with_appearances(140)
            .with_last_team("Mavericks")
            .with_set_code("M1"),
        Player::new("B Thompson", Role::AllRounder, "Australia", Money::parse("1.5").unwrap(), 27)
            .with_caps(10, 40, 55)
            .with_appearances(60)
            .with_set_code("AL1"),
        Player::new("C Reddy", Role::Bowler, "India", Money::from_major(1), 24)
            .with_caps(0, 12, 20)
            .with_appearances(30)
            .with_last_team("Chargers")
            .with_set_code("FA1"),
        Player::new("D Fletcher", Role::WicketKeeper, "England", Money::parse("0.75").unwrap(), 29)
            .with_caps(25, 60, 45)
            .with_appearances(45)
            .with_set_code("WK1"),
        Player::new("E Kumar", Role::Bowler, "India", Money::parse("0.30").unwrap(), 22)
            .with_set_code("UFA1"),
        Player::new("F Nair", Role::Batter, "India", Money::parse("0.20").unwrap(), 20)
            .with_set_code("UBA1"),
    ]
}

fn main() {
    println!("===========================================");
    println!("  auction-core - demo auction");
    println!("===========================================");
    println!();

    let teams = demo_teams();
    let pool = demo_pool();
    let total_purse = Money::from_major(120);

    let mut auction = Auctioneer::new(teams, pool, SetOrder::season_2025())
        .expect("demo configuration is valid");

    let mut progress = |idx: usize, total: usize, label: &str| {
        println!("  [{}/{}] {}", idx + 1, total, label);
    };
    auction.run_seeded(2025, Some(&mut progress));

    println!();
    println!("=== LEDGER ===");
    for record in auction.ledger() {
        match record.status {
            LotStatus::Sold => println!(
                "  {:<14} {:<13} base {:>6}  ->  {} to {} ({} bids)",
                record.player_name,
                record.role.label(),
                record.base_price,
                record.final_price.expect("sold lots carry a price"),
                record.winner.as_deref().expect("sold lots carry a winner"),
                record.bid_count(),
            ),
            LotStatus::Unsold => println!(
                "  {:<14} {:<13} base {:>6}  ->  unsold ({} bids)",
                record.player_name,
                record.role.label(),
                record.base_price,
                record.bid_count(),
            ),
        }
    }

    println!();
    println!("=== TEAMS ===");
    for team in auction.teams() {
        println!(
            "  {:<18} squad {:>2}  spent {:>6}  purse {:>6}",
            team.name(),
            team.squad_size(),
            total_purse - team.purse(),
            team.purse(),
        );
        for player in team.squad() {
            println!("      {} ({})", player.name, player.role.label());
        }
    }
}
