use chrono::{Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_time(ts: Option<NaiveDateTime>) -> String {
    ts.map(|ts| ts.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

pub fn format_hours(hours: Option<f64>) -> String {
    match hours {
        Some(h) => format!("{:.1} h", h),
        None => "-".to_string(),
    }
}
