//! Plain-text rendering for the terminal.

use packpal_core::{PackingItem, PackingList, TripDetails, WeatherForecast};

pub fn render_list(list: &PackingList) -> String {
    let progress = list.progress();
    let mut lines = vec![
        list.name.clone(),
        format!(
            "Packed {}/{} ({}%)",
            progress.checked, progress.total, progress.percent
        ),
    ];
    for (category, items) in list.items_by_category() {
        lines.push(String::new());
        lines.push(category.title().to_string());
        lines.extend(items.into_iter().map(render_item));
    }
    lines.join("\n")
}

fn render_item(item: &PackingItem) -> String {
    let mut line = format!(
        "  [{}] {}",
        if item.checked { "x" } else { " " },
        item.name
    );
    if item.quantity > 1 {
        line.push_str(&format!(" ×{}", item.quantity));
    }
    if item.essential {
        line.push_str(" (essential)");
    }
    line
}

pub fn render_forecast(forecast: &WeatherForecast) -> String {
    let current = &forecast.current;
    let mut lines = vec![
        format!("Weather for {}, {}", forecast.city, forecast.country),
        format!(
            "Now: {:.1}°C, {} ({}), humidity {:.0}%",
            current.temp,
            current.description,
            sky_label(&current.condition_code),
            current.humidity
        ),
    ];
    lines.extend(forecast.daily.iter().map(|day| {
        format!(
            "  {}  {:>5.1}°C / {:>5.1}°C  {:>5.1} mm  {}",
            day.date, day.temp_min, day.temp_max, day.precipitation_mm, day.description
        )
    }));
    lines.join("\n")
}

pub fn render_saved_trips(trips: &[TripDetails]) -> String {
    if trips.is_empty() {
        return "No saved trips yet.".to_string();
    }
    trips
        .iter()
        .map(|trip| {
            format!(
                "{}, {}  {} - {}  {} / {}",
                trip.destination.city,
                trip.destination.country,
                trip.dates.start,
                trip.dates.end,
                trip.purpose,
                trip.luggage_capacity
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Coarse sky label for a weatherapi.com condition code.
pub fn sky_label(condition_code: &str) -> &'static str {
    match condition_code.parse::<u32>() {
        Ok(1000) => "clear",
        Ok(1003..=1009) => "cloudy",
        Ok(1180..=1201) => "rain",
        Ok(1210..=1225) => "snow",
        Ok(1273..=1282) => "thunder",
        _ => "cloudy",
    }
}
