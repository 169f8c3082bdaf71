use jardim_core::{
    params::{CreateEntry, CreateSpecies, RegisterPlant, UpdateEntry},
    Database, GardenError, WATERING_TASK_TYPE,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn sample_species() -> CreateSpecies {
    CreateSpecies {
        popular_name: "Jiboia".to_string(),
        scientific_name: "Epipremnum aureum".to_string(),
        care_instructions: "Luz indireta.".to_string(),
        watering_interval_days: 7,
    }
}

fn sample_plant(species_id: u64) -> RegisterPlant {
    RegisterPlant {
        nickname: "Jiboia da sala".to_string(),
        location: "Sala de estar".to_string(),
        species_id,
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_create_and_lookup_gardener() {
    let (_temp_file, db) = create_test_db();

    let gardener = db
        .create_gardener("Ana", "ana@example.com")
        .expect("Failed to create gardener");
    assert!(gardener.id > 0);
    assert_eq!(gardener.name, "Ana");
    assert!(gardener.plants.is_empty());

    let found = db
        .get_gardener_by_email("ana@example.com")
        .expect("Failed to look up gardener")
        .expect("Gardener should exist");
    assert_eq!(found.id, gardener.id);

    assert!(db
        .get_gardener_by_email("ninguem@example.com")
        .expect("Lookup should succeed")
        .is_none());
}

#[test]
fn test_duplicate_email_conflicts() {
    let (_temp_file, db) = create_test_db();

    db.create_gardener("Ana", "ana@example.com")
        .expect("First insert should succeed");

    let err = db.create_gardener("Bia", "ana@example.com").unwrap_err();
    assert!(matches!(err, GardenError::EmailTaken { .. }));
}

#[test]
fn test_create_and_list_species() {
    let (_temp_file, db) = create_test_db();

    let species = db
        .create_species(&sample_species())
        .expect("Failed to create species");
    assert_eq!(species.popular_name, "Jiboia");
    assert_eq!(species.watering_interval_days, 7);

    let all = db.list_species().expect("Failed to list species");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], species);
}

#[test]
fn test_check_violation_is_not_reported_as_duplicate() {
    let (_temp_file, db) = create_test_db();

    // A CHECK failure on the interval must surface as a database error,
    // never as a name conflict
    let mut params = sample_species();
    params.watering_interval_days = 0;
    let err = db.create_species(&params).unwrap_err();
    assert!(matches!(err, GardenError::Database { .. }));
}

#[test]
fn test_duplicate_species_name_conflicts() {
    let (_temp_file, db) = create_test_db();

    db.create_species(&sample_species())
        .expect("First insert should succeed");

    let err = db.create_species(&sample_species()).unwrap_err();
    match err {
        GardenError::SpeciesExists { name } => assert_eq!(name, "Jiboia"),
        other => panic!("Expected SpeciesExists, got {other:?}"),
    }
}

#[test]
fn test_register_plant_requires_existing_references() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.register_plant(99, &sample_plant(1)).unwrap_err();
    assert!(matches!(err, GardenError::GardenerNotFound { id: 99 }));

    let gardener = db
        .create_gardener("Ana", "ana@example.com")
        .expect("Failed to create gardener");
    let err = db
        .register_plant(gardener.id, &sample_plant(123))
        .unwrap_err();
    assert!(matches!(err, GardenError::SpeciesNotFound { id: 123 }));
}

#[test]
fn test_list_plants_populates_species() {
    let (_temp_file, mut db) = create_test_db();

    let gardener = db
        .create_gardener("Ana", "ana@example.com")
        .expect("Failed to create gardener");
    let species = db
        .create_species(&sample_species())
        .expect("Failed to create species");

    db.register_plant(gardener.id, &sample_plant(species.id))
        .expect("Failed to register plant");
    db.register_plant(
        gardener.id,
        &RegisterPlant {
            nickname: "Jiboia do quarto".to_string(),
            location: "Quarto".to_string(),
            species_id: species.id,
        },
    )
    .expect("Failed to register plant");

    let plants = db.list_plants(gardener.id).expect("Failed to list plants");
    assert_eq!(plants.len(), 2);
    for plant in &plants {
        assert_eq!(plant.species, species);
        assert_eq!(plant.species_id, species.id);
    }
}

#[test]
fn test_list_plants_for_unknown_gardener_is_empty() {
    let (_temp_file, db) = create_test_db();

    let plants = db.list_plants(99).expect("Failed to list plants");
    assert!(plants.is_empty());
}

#[test]
fn test_log_task_and_last_watering() {
    let (_temp_file, mut db) = create_test_db();

    let gardener = db
        .create_gardener("Ana", "ana@example.com")
        .expect("Failed to create gardener");
    let species = db
        .create_species(&sample_species())
        .expect("Failed to create species");
    let plant = db
        .register_plant(gardener.id, &sample_plant(species.id))
        .expect("Failed to register plant");

    assert!(db
        .last_watering(plant.id)
        .expect("Query should succeed")
        .is_none());

    db.log_care_task(plant.id, "Adubação")
        .expect("Failed to log task");
    let first = db
        .log_care_task(plant.id, WATERING_TASK_TYPE)
        .expect("Failed to log watering");
    let second = db
        .log_care_task(plant.id, WATERING_TASK_TYPE)
        .expect("Failed to log watering");

    let last = db
        .last_watering(plant.id)
        .expect("Query should succeed")
        .expect("Watering should exist");
    // Fertilizing is ignored; the newest watering wins
    assert_eq!(last.task_type, WATERING_TASK_TYPE);
    assert!(last.performed_at >= first.performed_at);
    assert_eq!(last.id, second.id);

    let fetched = db
        .get_plant(plant.id)
        .expect("Failed to get plant")
        .expect("Plant should exist");
    assert_eq!(fetched.tasks.len(), 3);
}

#[test]
fn test_log_task_for_unknown_plant() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.log_care_task(7, WATERING_TASK_TYPE).unwrap_err();
    assert!(matches!(err, GardenError::PlantNotFound { id: 7 }));
}

#[test]
fn test_delete_plant_removes_care_tasks() {
    let (_temp_file, mut db) = create_test_db();

    let gardener = db
        .create_gardener("Ana", "ana@example.com")
        .expect("Failed to create gardener");
    let species = db
        .create_species(&sample_species())
        .expect("Failed to create species");
    let plant = db
        .register_plant(gardener.id, &sample_plant(species.id))
        .expect("Failed to register plant");

    db.log_care_task(plant.id, WATERING_TASK_TYPE)
        .expect("Failed to log watering");
    db.log_care_task(plant.id, "Adubação")
        .expect("Failed to log task");

    db.delete_plant(plant.id).expect("Failed to delete plant");

    assert!(db
        .get_plant(plant.id)
        .expect("Query should succeed")
        .is_none());
    // No orphan tasks may survive the plant
    assert!(db
        .get_tasks(plant.id)
        .expect("Query should succeed")
        .is_empty());

    let err = db.delete_plant(plant.id).unwrap_err();
    assert!(matches!(err, GardenError::PlantNotFound { .. }));
}

#[test]
fn test_entry_crud_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_entry(&CreateEntry {
            popular_name: "Samambaia".to_string(),
            scientific_name: "Nephrolepis exaltata".to_string(),
            family: "Lomariopsidaceae".to_string(),
            origin: "Américas".to_string(),
            care_notes: "Muita umidade.".to_string(),
        })
        .expect("Failed to create entry");

    let fetched = db
        .get_entry(created.id)
        .expect("Failed to get entry")
        .expect("Entry should exist");
    assert_eq!(fetched, created);

    let deleted = db.delete_entry(created.id).expect("Failed to delete entry");
    assert_eq!(deleted, created);
    assert!(db
        .get_entry(created.id)
        .expect("Query should succeed")
        .is_none());

    let err = db.delete_entry(created.id).unwrap_err();
    assert!(matches!(err, GardenError::EntryNotFound { .. }));
}

#[test]
fn test_entry_partial_update_touches_only_supplied_fields() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_entry(&CreateEntry {
            popular_name: "Jiboia".to_string(),
            scientific_name: "Epipremnum aureum".to_string(),
            family: "Araceae".to_string(),
            origin: "Sudeste Asiático".to_string(),
            care_notes: "Luz indireta.".to_string(),
        })
        .expect("Failed to create entry");

    let updated = db
        .update_entry(
            created.id,
            &UpdateEntry {
                care_notes: Some("Regar uma vez por semana.".to_string()),
                ..Default::default()
            },
        )
        .expect("Failed to update entry");

    assert_eq!(updated.care_notes, "Regar uma vez por semana.");
    assert_eq!(updated.popular_name, created.popular_name);
    assert_eq!(updated.scientific_name, created.scientific_name);
    assert_eq!(updated.family, created.family);
    assert_eq!(updated.origin, created.origin);

    let fetched = db
        .get_entry(created.id)
        .expect("Failed to get entry")
        .expect("Entry should exist");
    assert_eq!(fetched, updated);
}

#[test]
fn test_entry_list_pagination() {
    let (_temp_file, db) = create_test_db();

    for i in 0..5 {
        db.create_entry(&CreateEntry {
            popular_name: format!("Planta {i}"),
            scientific_name: format!("Planta scientifica {i}"),
            family: "Família".to_string(),
            origin: "Origem".to_string(),
            care_notes: "Cuidados".to_string(),
        })
        .expect("Failed to create entry");
    }

    let page = db.list_entries(1, 2).expect("Failed to list entries");
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].popular_name, "Planta 1");
    assert_eq!(page[1].popular_name, "Planta 2");

    let all = db.list_entries(0, 100).expect("Failed to list entries");
    assert_eq!(all.len(), 5);
}

#[test]
fn test_species_seeding_is_idempotent() {
    let (_temp_file, mut db) = create_test_db();

    let inserted = db
        .ensure_species_catalog()
        .expect("Failed to seed species");
    assert_eq!(inserted, 3);

    let inserted_again = db
        .ensure_species_catalog()
        .expect("Failed to re-seed species");
    assert_eq!(inserted_again, 0);

    let species = db.list_species().expect("Failed to list species");
    assert_eq!(species.len(), 3);

    let names: Vec<&str> = species.iter().map(|s| s.popular_name.as_str()).collect();
    assert_eq!(names, ["Jiboia", "Espada-de-São-Jorge", "Samambaia"]);
}

#[test]
fn test_entry_seeding_checks_row_count() {
    let (_temp_file, mut db) = create_test_db();

    assert_eq!(db.ensure_entry_catalog().expect("Failed to seed"), 3);
    assert_eq!(db.ensure_entry_catalog().expect("Failed to re-seed"), 0);
    assert_eq!(db.list_entries(0, 100).expect("Failed to list").len(), 3);
}
