use pretty_assertions::assert_eq;
use sales_forecast::data::RawObservation;
use sales_forecast::{ModelStore, ProductSeries, TrendModel};
use tempfile::tempdir;

fn fitted_model(sales: &[f64]) -> TrendModel {
    let observations = sales
        .iter()
        .enumerate()
        .map(|(t, &s)| {
            RawObservation::new(&format!("2024-{:02}", t + 1), s)
                .validate(t)
                .unwrap()
        })
        .collect();
    TrendModel::fit(&ProductSeries::from_observations("Soap", observations)).unwrap()
}

#[test]
fn put_writes_a_model_file() {
    let dir = tempdir().unwrap();
    let store = ModelStore::new(dir.path()).unwrap();
    let model = fitted_model(&[100.0, 110.0]);

    store.put("Soap", model).unwrap();

    let path = store.model_path("Soap");
    assert_eq!(path, dir.path().join("model_Soap.json"));
    assert!(path.exists());
}

#[test]
fn durable_copy_round_trips() {
    let dir = tempdir().unwrap();
    let store = ModelStore::new(dir.path()).unwrap();
    let model = fitted_model(&[100.0, 110.0, 120.0]);

    store.put("Soap", model).unwrap();

    assert_eq!(store.load("Soap").unwrap(), model);
}

#[test]
fn put_overwrites_memory_and_disk() {
    let dir = tempdir().unwrap();
    let store = ModelStore::new(dir.path()).unwrap();

    let rising = fitted_model(&[100.0, 110.0]);
    let flat = fitted_model(&[100.0, 100.0]);

    store.put("Soap", rising).unwrap();
    store.put("Soap", flat).unwrap();

    assert_eq!(store.get("Soap"), Some(flat));
    assert_eq!(store.load("Soap").unwrap(), flat);
    assert_eq!(store.len(), 1);
}

#[test]
fn get_is_scoped_per_product() {
    let dir = tempdir().unwrap();
    let store = ModelStore::new(dir.path()).unwrap();

    store.put("Soap", fitted_model(&[100.0, 110.0])).unwrap();

    assert!(store.get("Soap").is_some());
    assert!(store.get("Shampoo").is_none());
}

#[test]
fn hostile_product_names_stay_inside_the_directory() {
    let dir = tempdir().unwrap();
    let store = ModelStore::new(dir.path()).unwrap();

    store
        .put("../escape", fitted_model(&[100.0, 110.0]))
        .unwrap();

    let path = store.model_path("../escape");
    assert_eq!(path, dir.path().join("model_.._escape.json"));
    assert!(path.exists());
    assert!(!dir.path().parent().unwrap().join("model_escape.json").exists());
}

#[test]
fn opening_a_store_creates_the_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("var").join("models");

    let store = ModelStore::new(&nested).unwrap();

    assert!(nested.is_dir());
    assert!(store.is_empty());
}
