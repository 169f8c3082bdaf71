mod common;

use common::create_test_keeper;
use jiff::{tz::TimeZone, Span, Timestamp};
use jardim_core::{
    params::{CreateGardener, CreateSpecies, Id, LogCareTask, RegisterPlant},
    WATERING_TASK_TYPE,
};

async fn seeded_plant(keeper: &jardim_core::Keeper, interval_days: i32) -> u64 {
    let gardener = keeper
        .create_gardener(&CreateGardener {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        })
        .await
        .expect("Failed to create gardener");

    let species = keeper
        .create_species(&CreateSpecies {
            popular_name: "Jiboia".to_string(),
            scientific_name: "Epipremnum aureum".to_string(),
            care_instructions: "Luz indireta.".to_string(),
            watering_interval_days: interval_days,
        })
        .await
        .expect("Failed to create species");

    keeper
        .register_plant(
            gardener.id,
            &RegisterPlant {
                nickname: "Jiboia da sala".to_string(),
                location: "Sala".to_string(),
                species_id: species.id,
            },
        )
        .await
        .expect("Failed to register plant")
        .id
}

#[tokio::test]
async fn never_watered_plant_has_no_due_date() {
    let (_temp_dir, keeper) = create_test_keeper().await;
    let plant_id = seeded_plant(&keeper, 7).await;

    let forecast = keeper
        .next_watering(&Id { id: plant_id })
        .await
        .expect("Forecast should succeed");

    assert!(forecast.due_on.is_none());
    assert!(forecast.message.contains("nunca foi regada"));
}

#[tokio::test]
async fn watering_scenario_produces_due_date_and_message() {
    let (_temp_dir, keeper) = create_test_keeper().await;
    let plant_id = seeded_plant(&keeper, 7).await;

    let task = keeper
        .log_care_task(
            plant_id,
            &LogCareTask {
                task_type: WATERING_TASK_TYPE.to_string(),
            },
        )
        .await
        .expect("Failed to log watering");
    assert_eq!(task.task_type, WATERING_TASK_TYPE);

    let forecast = keeper
        .next_watering(&Id { id: plant_id })
        .await
        .expect("Forecast should succeed");

    let expected = task
        .performed_at
        .to_zoned(TimeZone::UTC)
        .date()
        .checked_add(Span::new().days(7))
        .expect("Date arithmetic should succeed");

    assert_eq!(forecast.due_on, Some(expected));
    assert!(forecast
        .message
        .contains(&expected.strftime("%d/%m/%Y").to_string()));
}

#[tokio::test]
async fn forecast_is_idempotent_absent_new_waterings() {
    let (_temp_dir, keeper) = create_test_keeper().await;
    let plant_id = seeded_plant(&keeper, 3).await;

    keeper
        .log_care_task(
            plant_id,
            &LogCareTask {
                task_type: WATERING_TASK_TYPE.to_string(),
            },
        )
        .await
        .expect("Failed to log watering");

    let first = keeper
        .next_watering(&Id { id: plant_id })
        .await
        .expect("Forecast should succeed");
    let second = keeper
        .next_watering(&Id { id: plant_id })
        .await
        .expect("Forecast should succeed");

    assert_eq!(first, second);
}

#[tokio::test]
async fn non_watering_tasks_do_not_move_the_forecast() {
    let (_temp_dir, keeper) = create_test_keeper().await;
    let plant_id = seeded_plant(&keeper, 7).await;

    keeper
        .log_care_task(
            plant_id,
            &LogCareTask {
                task_type: "Adubação".to_string(),
            },
        )
        .await
        .expect("Failed to log fertilizing");

    let forecast = keeper
        .next_watering(&Id { id: plant_id })
        .await
        .expect("Forecast should succeed");
    assert!(forecast.due_on.is_none());
}

#[tokio::test]
async fn listed_plants_carry_their_full_species() {
    let (_temp_dir, keeper) = create_test_keeper().await;

    let gardener = keeper
        .create_gardener(&CreateGardener {
            name: "Bia".to_string(),
            email: "bia@example.com".to_string(),
        })
        .await
        .expect("Failed to create gardener");

    keeper
        .ensure_species_catalog()
        .await
        .expect("Failed to seed species");
    let species = keeper.list_species().await.expect("Failed to list species");

    for s in &species {
        keeper
            .register_plant(
                gardener.id,
                &RegisterPlant {
                    nickname: format!("Minha {}", s.popular_name),
                    location: "Varanda".to_string(),
                    species_id: s.id,
                },
            )
            .await
            .expect("Failed to register plant");
    }

    let plants = keeper
        .list_plants(gardener.id)
        .await
        .expect("Failed to list plants");
    assert_eq!(plants.len(), species.len());
    for (plant, s) in plants.iter().zip(&species) {
        assert_eq!(&plant.species, s);
        assert!(!plant.species.care_instructions.is_empty());
    }
}

#[tokio::test]
async fn listing_plants_of_unknown_gardener_is_empty() {
    let (_temp_dir, keeper) = create_test_keeper().await;

    // The listing is a plain ownership filter; an id nobody owns simply
    // matches nothing
    let plants = keeper
        .list_plants(404)
        .await
        .expect("Listing should succeed");
    assert!(plants.is_empty());
}

#[tokio::test]
async fn due_date_stays_in_calendar_days() {
    let (_temp_dir, keeper) = create_test_keeper().await;
    let plant_id = seeded_plant(&keeper, 15).await;

    keeper
        .log_care_task(
            plant_id,
            &LogCareTask {
                task_type: WATERING_TASK_TYPE.to_string(),
            },
        )
        .await
        .expect("Failed to log watering");

    let forecast = keeper
        .next_watering(&Id { id: plant_id })
        .await
        .expect("Forecast should succeed");
    let due = forecast.due_on.expect("Due date should exist");

    let today = Timestamp::now().to_zoned(TimeZone::UTC).date();
    let distance = due.since(today).expect("Span should compute").get_days();
    // Watering happened moments ago, so the due date is interval days out
    assert!((14..=15).contains(&distance));
}
