use contracts::shared::column_filter::GridConfig;
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::data_grid::DataGrid;

const GRID_CONFIG: &str = include_str!("../assets/people_grid.json");
const GRID_ROWS: &str = include_str!("../assets/people.json");

fn load_demo() -> Result<(GridConfig, Vec<Value>), String> {
    let config = GridConfig::from_json(GRID_CONFIG).map_err(|e| e.to_string())?;
    let rows: Vec<Value> =
        serde_json::from_str(GRID_ROWS).map_err(|e| format!("invalid rows: {}", e))?;
    Ok((config, rows))
}

#[component]
pub fn App() -> impl IntoView {
    match load_demo() {
        Ok((config, rows)) => view! {
            <main class="app">
                <DataGrid config=config rows=rows />
            </main>
        }
        .into_any(),
        Err(err) => {
            log::error!("Failed to load grid: {}", err);
            view! { <div class="error">{err}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_demo_is_valid() {
        let (config, rows) = load_demo().unwrap();
        assert!(!rows.is_empty());
        for row in &rows {
            for column in &config.columns {
                assert!(row.get(&column.id).is_some(), "row lacks `{}`", column.id);
            }
        }
    }
}
