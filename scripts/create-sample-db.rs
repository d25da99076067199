// Script to create a sample Batangas risk monitoring database for local inspection
// Run with: cargo run --bin create-sample-db

use db_inspector_lib::config::DEFAULT_DATABASE_PATH;
use rusqlite::{params, Connection};
use std::path::PathBuf;

const HAZARD_LAYERS: &[(&str, &str)] = &[
    ("risk-volcano", "Volcano_Risk"),
    ("risk-eq-landslide", "Seismic_Landslide_Risk"),
    ("risk-rain-landslide", "Rain_Landslide_Risk"),
    ("risk-liquefaction", "Liquefaction_Risk"),
    ("risk-storm-surge", "Storm_Surge_Risk"),
    ("risk-tsunami", "Tsunami_Risk"),
];

// Municipality, lat, lng, then one level per hazard column above
const MUNICIPALITIES: &[(&str, f64, f64, [&str; 6])] = &[
    ("Agoncillo", 13.9334, 120.9285, ["High", "High", "Moderate", "High", "Low", "Moderate"]),
    ("Balayan", 13.9376, 120.7325, ["Low", "Moderate", "Moderate", "High", "High", "High"]),
    ("Batangas City", 13.7565, 121.0583, ["Low", "Moderate", "Low", "High", "High", "High"]),
    ("Calaca", 13.9303, 120.8131, ["Moderate", "Moderate", "Moderate", "High", "High", "High"]),
    ("Laurel", 14.0500, 120.9000, ["High", "High", "High", "Moderate", "Low", "Moderate"]),
    ("Lemery", 13.8817, 120.9131, ["Moderate", "Moderate", "Low", "High", "High", "High"]),
    ("Lipa City", 13.9411, 121.1631, ["Low", "Moderate", "Low", "Low", "Low", "Low"]),
    ("Nasugbu", 14.0722, 120.6331, ["Low", "High", "High", "Moderate", "High", "High"]),
    ("San Nicolas", 13.9281, 120.9511, ["High", "High", "Moderate", "High", "Low", "Moderate"]),
    ("Santo Tomas", 14.1078, 121.1414, ["Low", "Low", "Low", "Moderate", "Low", "Low"]),
    ("Talisay", 14.0953, 121.0206, ["High", "High", "High", "High", "Low", "Moderate"]),
    ("Tanauan City", 14.0864, 121.1497, ["Moderate", "Moderate", "Moderate", "Moderate", "Low", "Low"]),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = PathBuf::from(DEFAULT_DATABASE_PATH);

    // Replace any previous copy
    if db_path.exists() {
        std::fs::remove_file(&db_path)?;
    }

    let conn = Connection::open(&db_path)?;

    conn.execute_batch(
        r#"
        -- One row per municipality, one risk level per hazard
        CREATE TABLE municipality_risk (
            Municipality TEXT PRIMARY KEY,
            lat REAL NOT NULL,
            lng REAL NOT NULL,
            Volcano_Risk TEXT NOT NULL DEFAULT 'Low',
            Seismic_Landslide_Risk TEXT NOT NULL DEFAULT 'Low',
            Rain_Landslide_Risk TEXT NOT NULL DEFAULT 'Low',
            Liquefaction_Risk TEXT NOT NULL DEFAULT 'Low',
            Storm_Surge_Risk TEXT NOT NULL DEFAULT 'Low',
            Tsunami_Risk TEXT NOT NULL DEFAULT 'Low'
        );

        -- Map sidebar layer id to risk column
        CREATE TABLE hazard_layers (
            layer_id TEXT PRIMARY KEY,
            column_name TEXT NOT NULL
        );
        "#,
    )?;

    for (layer_id, column_name) in HAZARD_LAYERS {
        conn.execute(
            "INSERT INTO hazard_layers (layer_id, column_name) VALUES (?, ?)",
            params![layer_id, column_name],
        )?;
    }

    for (name, lat, lng, levels) in MUNICIPALITIES {
        conn.execute(
            "INSERT INTO municipality_risk VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                name, lat, lng, levels[0], levels[1], levels[2], levels[3], levels[4], levels[5]
            ],
        )?;
    }

    println!("Created sample database at: {}", db_path.display());
    println!(
        "   {} municipalities, {} hazard layers",
        MUNICIPALITIES.len(),
        HAZARD_LAYERS.len()
    );

    Ok(())
}
