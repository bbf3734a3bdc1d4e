//! Integration tests for the full sourcing flow

use tempfile::tempdir;

use fleetscout_app::repository::open_vehicle_store_at;
use fleetscout_app::sourcing::{
    assess_market, portfolio_summary, ranked_vehicles, source_vehicles, MarketOutlook,
    SourcingOptions,
};
use fleetscout_domain::model::{MarketSegment, VehicleListing};
use fleetscout_types::{CompetitionLevel, OpportunityTier, VehicleClass};

fn listing_feed() -> Vec<VehicleListing> {
    vec![
        VehicleListing::new("Toyota", "Camry", 2019, 18_000, 45_000, "Los Angeles", 55.0)
            .with_url("#"),
        VehicleListing::new("Jeep", "Wrangler", 2019, 28_000, 35_000, "Los Angeles", 75.0)
            .with_url("#"),
        VehicleListing::new("Tesla", "Model 3", 2020, 35_000, 30_000, "Los Angeles", 95.0)
            .with_url("#"),
        VehicleListing::new("Saturn", "Ion", 2004, 1000, 180_000, "Los Angeles", 5.0),
    ]
}

#[test]
fn test_source_rank_and_summarize() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("data").join("vehicles.db");
    let mut store = open_vehicle_store_at(&db_path).unwrap();

    // Model 3 exceeds the price cap and is skipped
    let options = SourcingOptions::new().with_max_price(30_000);
    let summary = source_vehicles(&mut store, &listing_feed(), &options).unwrap();
    assert_eq!(summary.stored.len(), 3);
    assert_eq!(summary.skipped, 1);

    // Wrangler: revenue 1500, fee 225, depreciation 280, costs 855,
    // profit 645, score ~2.30; Camry 2.25; Ion 0
    let ranked = ranked_vehicles(&store).unwrap();
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].record.model, "Wrangler");
    assert_eq!(ranked[1].record.model, "Camry");
    assert_eq!(ranked[2].record.model, "Ion");
    assert!((ranked[1].record.roi_score - 2.25).abs() < 1e-9);
    assert_eq!(ranked[2].record.roi_score, 0.0);
    assert_eq!(ranked[2].tier, OpportunityTier::Weak);
    assert!(ranked[2].financials.payback_months.is_none());

    let portfolio = portfolio_summary(&store).unwrap();
    assert_eq!(portfolio.vehicle_count, 3);
    assert_eq!(portfolio.total_investment, 18_000 + 28_000 + 1000);
    assert_eq!(portfolio.strong_count, 0);
}

#[test]
fn test_resourcing_replaces_instead_of_duplicating() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("vehicles.db");
    let mut store = open_vehicle_store_at(&db_path).unwrap();

    let options = SourcingOptions::new();
    source_vehicles(&mut store, &listing_feed(), &options).unwrap();

    // The Camry gets relisted cheaper; everything else is unchanged
    let mut second_feed = listing_feed();
    second_feed[0].price = 16_500;
    source_vehicles(&mut store, &second_feed, &options).unwrap();

    let ranked = ranked_vehicles(&store).unwrap();
    assert_eq!(ranked.len(), 4);
    let camry = ranked
        .iter()
        .find(|v| v.record.model == "Camry")
        .unwrap();
    assert_eq!(camry.record.price, 16_500);
}

#[test]
fn test_store_survives_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("vehicles.db");

    {
        let mut store = open_vehicle_store_at(&db_path).unwrap();
        source_vehicles(&mut store, &listing_feed(), &SourcingOptions::new()).unwrap();
    }

    let store = open_vehicle_store_at(&db_path).unwrap();
    let ranked = ranked_vehicles(&store).unwrap();
    assert_eq!(ranked.len(), 4);
    assert_eq!(ranked[0].record.model, "Model 3");
}

#[test]
fn test_market_assessment_flow() {
    let segments = vec![
        MarketSegment {
            class: VehicleClass::Compact,
            avg_daily_rate: 55.0,
            demand_score: 9,
            competition: CompetitionLevel::High,
        },
        MarketSegment {
            class: VehicleClass::Suv,
            avg_daily_rate: 85.0,
            demand_score: 8,
            competition: CompetitionLevel::Medium,
        },
        MarketSegment {
            class: VehicleClass::Truck,
            avg_daily_rate: 95.0,
            demand_score: 5,
            competition: CompetitionLevel::Low,
        },
    ];

    let assessments = assess_market(&segments);
    assert_eq!(assessments.len(), 3);
    assert_eq!(assessments[0].outlook, MarketOutlook::Contested);
    assert_eq!(assessments[1].outlook, MarketOutlook::Favorable);
    assert_eq!(assessments[2].outlook, MarketOutlook::Watch);
}
