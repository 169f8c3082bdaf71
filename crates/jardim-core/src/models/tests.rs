//! Wire-format tests for the domain models.

use jiff::Timestamp;
use serde_json::{json, Value};

use super::{CareTask, Gardener, Plant, PlantEntry, Species};

fn sample_species() -> Species {
    Species {
        id: 1,
        popular_name: "Jiboia".to_string(),
        scientific_name: "Epipremnum aureum".to_string(),
        care_instructions: "Luz indireta.".to_string(),
        watering_interval_days: 7,
    }
}

#[test]
fn species_serializes_with_portuguese_field_names() {
    let value = serde_json::to_value(sample_species()).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 1,
            "nome_popular": "Jiboia",
            "nome_cientifico": "Epipremnum aureum",
            "instrucoes_de_cuidado": "Luz indireta.",
            "frequencia_rega_dias": 7,
        })
    );
}

#[test]
fn plant_embeds_species_and_tasks() {
    let ts: Timestamp = "2024-03-10T12:00:00Z".parse().unwrap();
    let plant = Plant {
        id: 3,
        nickname: "Jiboia da sala".to_string(),
        location: "Sala".to_string(),
        acquired_at: ts,
        species_id: 1,
        species: sample_species(),
        tasks: vec![CareTask {
            id: 9,
            task_type: "Rega".to_string(),
            performed_at: ts,
            plant_id: 3,
        }],
    };

    let value = serde_json::to_value(&plant).unwrap();
    assert_eq!(value["apelido"], "Jiboia da sala");
    assert_eq!(value["especie"]["nome_popular"], "Jiboia");
    assert_eq!(value["tarefas"][0]["tipo_tarefa"], "Rega");
    assert_eq!(value["data_aquisicao"], "2024-03-10T12:00:00Z");

    let back: Plant = serde_json::from_value(value).unwrap();
    assert_eq!(back, plant);
}

#[test]
fn gardener_plants_default_to_empty_on_deserialize() {
    let value = json!({"id": 1, "nome": "Ana", "email": "ana@example.com"});
    let gardener: Gardener = serde_json::from_value(value).unwrap();
    assert_eq!(gardener.name, "Ana");
    assert!(gardener.plants.is_empty());
}

#[test]
fn entry_round_trips_through_wire_names() {
    let entry = PlantEntry {
        id: 2,
        popular_name: "Samambaia".to_string(),
        scientific_name: "Nephrolepis exaltata".to_string(),
        family: "Lomariopsidaceae".to_string(),
        origin: "Américas".to_string(),
        care_notes: "Borrife água nas folhas.".to_string(),
    };

    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["familia"], "Lomariopsidaceae");
    assert_eq!(value["origem"], "Américas");
    let back: PlantEntry = serde_json::from_value(value).unwrap();
    assert_eq!(back, entry);
}

#[test]
fn value_has_no_english_keys() {
    let value: Value = serde_json::to_value(sample_species()).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert!(!keys.iter().any(|k| k.as_str() == "popular_name"));
}
