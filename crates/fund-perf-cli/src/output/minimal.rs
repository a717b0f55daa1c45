use serde_json::Value;

/// Print just the key answer values from the output: the two performance
/// metrics, one per line, with N/A for anything that could not be computed.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        if map.contains_key("moic") || map.contains_key("irr_pct") {
            println!("MOIC: {}", format_minimal(map.get("moic")));
            println!("IRR: {}", format_irr(map.get("irr_pct")));
            return;
        }

        // Not a performance result; fall back to the first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(Some(val)));
            return;
        }
    }

    println!("{}", format_minimal(Some(result_obj)));
}

fn format_irr(value: Option<&Value>) -> String {
    match value {
        Some(Value::Null) | None => "N/A".to_string(),
        other => format!("{}%", format_minimal(other)),
    }
}

fn format_minimal(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => "N/A".to_string(),
        Some(other) => serde_json::to_string(other).unwrap_or_default(),
    }
}
