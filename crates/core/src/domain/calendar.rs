use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup<T> {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub entries: Vec<T>,
}

pub fn month_label(year: i32, month: u32) -> String {
    let name = MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    format!("{name} {year}")
}

/// Groups entries by the month of their start date. Groups and the entries
/// inside them come out in chronological order.
pub fn group_by_month<T, F>(mut entries: Vec<T>, start_date: F) -> Vec<MonthGroup<T>>
where
    F: Fn(&T) -> NaiveDate,
{
    entries.sort_by_key(|entry| start_date(entry));

    let mut groups: Vec<MonthGroup<T>> = Vec::new();
    for entry in entries {
        let date = start_date(&entry);
        let (year, month) = (date.year(), date.month());

        match groups.last_mut() {
            Some(group) if group.year == year && group.month == month => group.entries.push(entry),
            _ => groups.push(MonthGroup {
                year,
                month,
                label: month_label(year, month),
                entries: vec![entry],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
    }

    #[test]
    fn entries_are_grouped_chronologically() {
        let entries = vec![
            ("b", date("2025-04-10")),
            ("a", date("2025-03-20")),
            ("c", date("2025-03-01")),
            ("d", date("2026-03-05")),
        ];

        let groups = group_by_month(entries, |(_, d)| *d);

        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["marzo 2025", "abril 2025", "marzo 2026"]);

        let march: Vec<_> = groups[0].entries.iter().map(|(name, _)| *name).collect();
        assert_eq!(march, ["c", "a"]);
        assert_eq!(groups[0].month, 3);
        assert_eq!(groups[2].year, 2026);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = group_by_month(Vec::<NaiveDate>::new(), |d| *d);
        assert!(groups.is_empty());
    }

    #[test]
    fn labels_use_spanish_month_names() {
        assert_eq!(month_label(2025, 1), "enero 2025");
        assert_eq!(month_label(2025, 12), "diciembre 2025");
    }
}
