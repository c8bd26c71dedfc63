//! End-to-end flow over a real temp directory: load → search → export.

use std::path::Path;

use tempfile::TempDir;

use price_machine::data::columns::RoleTable;
use price_machine::data::loader::load_dir;
use price_machine::data::model::PriceCatalog;
use price_machine::data::search::find_text;
use price_machine::export::export_html;

fn write_file(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

/// The worked example: two loadable files plus one that resolves no product
/// column and must be skipped without breaking the scan.
fn sample_catalog_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "price1.csv",
        "Название,Цена,Вес\nМолоко,80,2\nКефир,90,1\n",
    );
    write_file(tmp.path(), "price2.csv", "Название,Цена\nХлеб,50\n");
    write_file(tmp.path(), "price_broken.csv", "Цена,Вес\n80,2\n");
    tmp
}

#[test]
fn full_flow_load_search_export() {
    let tmp = sample_catalog_dir();
    let mut catalog = PriceCatalog::default();
    let report = load_dir(tmp.path(), &RoleTable::default(), &mut catalog).unwrap();

    // price_broken.csv is skipped; the other two contribute three records.
    assert_eq!(report.files, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(catalog.len(), 3);

    // Search finds exactly the bread record.
    let hits = find_text(&catalog, "хлеб");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].product, "Хлеб");
    assert_eq!(hits[0].source_file, "price2.csv");

    // Export covers the whole catalog regardless of the search above.
    let target = tmp.path().join("out.html");
    export_html(&catalog, &target).unwrap();
    let html = std::fs::read_to_string(&target).unwrap();
    assert_eq!(html.matches("<tr>").count(), catalog.len() + 1);

    // Cheapest per kilogram first: Молоко at 40.00/kg gets rank 1.
    assert!(html.contains("<td>1</td>\n<td>Молоко</td>"));
}

#[test]
fn unit_prices_follow_price_over_weight() {
    let tmp = sample_catalog_dir();
    let mut catalog = PriceCatalog::default();
    load_dir(tmp.path(), &RoleTable::default(), &mut catalog).unwrap();

    for rec in catalog.records() {
        if rec.weight > 0.0 {
            assert!((rec.unit_price - rec.price / rec.weight).abs() < 1e-9);
        } else {
            assert_eq!(rec.unit_price, 0.0);
        }
    }
}

#[test]
fn custom_role_table_loads_english_headers() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "price_en.csv", "name,price,weight\nMilk,80,2\n");
    write_file(
        tmp.path(),
        "roles.json",
        r#"{"product": ["name"], "price": ["price"], "weight": ["weight"]}"#,
    );

    let roles = RoleTable::from_file(&tmp.path().join("roles.json")).unwrap();
    let mut catalog = PriceCatalog::default();
    load_dir(tmp.path(), &roles, &mut catalog).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].product, "Milk");
    assert!((catalog.records()[0].unit_price - 40.0).abs() < 1e-9);
}
