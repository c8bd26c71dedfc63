use std::path::Path;

use anyhow::{Context, Result};

/// Rows for one sample price list: (product, price, weight).
/// A `None` weight means the file has no weight column for that row.
type Row<'a> = (&'a str, f64, Option<f64>);

fn write_price_list(
    dir: &Path,
    name: &str,
    headers: &[&str],
    rows: &[Row<'_>],
) -> Result<()> {
    let path = dir.join(name);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(headers)?;
    for (product, price, weight) in rows {
        let price = price.to_string();
        match weight {
            Some(w) => {
                let weight = w.to_string();
                writer.write_record([*product, price.as_str(), weight.as_str()])?;
            }
            None => writer.write_record([*product, price.as_str()])?,
        }
    }
    writer.flush()?;
    println!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    let dir = Path::new("sample_prices");
    std::fs::create_dir_all(dir).context("creating sample_prices directory")?;

    // Three price lists exercising the different header synonyms.
    write_price_list(
        dir,
        "price_1.csv",
        &["Название", "Цена", "Вес"],
        &[
            ("Молоко 1л", 80.0, Some(1.0)),
            ("Сыр Гауда", 950.0, Some(1.0)),
            ("Масло сливочное", 180.0, Some(0.2)),
            ("Творог", 120.0, Some(0.5)),
        ],
    )?;

    write_price_list(
        dir,
        "price_2.csv",
        &["Продукт", "Розница", "Фасовка"],
        &[
            ("Молоко 1л", 75.0, Some(1.0)),
            ("Гречка", 110.0, Some(0.9)),
            ("Рис", 95.0, Some(0.8)),
        ],
    )?;

    // No weight column: the loader defaults each row to 1 kg.
    write_price_list(
        dir,
        "weekly_prices.csv",
        &["Наименование", "Цена"],
        &[("Хлеб", 50.0, None), ("Батон", 45.0, None)],
    )?;

    // Decoy: valid CSV, but the name does not contain "price",
    // so the loader must ignore it.
    write_price_list(
        dir,
        "stock.csv",
        &["Название", "Цена"],
        &[("Не для загрузки", 1.0, None)],
    )?;

    println!("Sample catalog ready: {}", dir.display());
    Ok(())
}
