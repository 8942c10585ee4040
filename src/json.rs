use crate::aggregate::DispatchSummary;
use crate::record::DispatchRecord;
use serde_json::{Map, Value};

pub fn write_json(
    records: &[DispatchRecord],
    summary: &DispatchSummary,
) -> Result<String, String> {
    let mut root = Map::new();
    root.insert("records".to_string(), Value::Number(records.len().into()));

    let mut docks = Vec::new();
    for (&dock, products) in &summary.totals_by_dock {
        let events = summary.events_by_dock.get(&dock).copied().unwrap_or(0);
        let mut entry = Map::new();
        entry.insert("dock".to_string(), Value::Number(dock.into()));
        entry.insert("dispatches".to_string(), Value::Number(events.into()));

        let mut product_map = Map::new();
        for (name, &quantity) in products {
            product_map.insert(name.clone(), Value::Number(quantity.into()));
        }
        entry.insert("products".to_string(), Value::Object(product_map));
        docks.push(Value::Object(entry));
    }
    root.insert("docks".to_string(), Value::Array(docks));

    root.insert(
        "least_active".to_string(),
        least_active_to_json(records, summary),
    );

    serde_json::to_string_pretty(&Value::Object(root)).map_err(|e| e.to_string())
}

fn least_active_to_json(records: &[DispatchRecord], summary: &DispatchSummary) -> Value {
    let dock = match summary.least_active_dock() {
        Some(dock) => dock,
        None => return Value::Null,
    };

    let mut map = Map::new();
    map.insert("dock".to_string(), Value::Number(dock.into()));

    match summary.top_product(dock) {
        Some(product) => {
            map.insert("top_product".to_string(), Value::String(product.to_string()));

            let details: Vec<Value> = records
                .iter()
                .filter(|r| r.dock == dock && r.product() == product)
                .map(|r| {
                    let mut detail = Map::new();
                    detail.insert("province".to_string(), Value::String(r.province()));
                    detail.insert("quantity".to_string(), Value::Number(r.quantity.into()));
                    Value::Object(detail)
                })
                .collect();
            map.insert("details".to_string(), Value::Array(details));
        }
        None => {
            map.insert("top_product".to_string(), Value::Null);
        }
    }

    Value::Object(map)
}
