//! Read-side subcommands: `list`, `summaries` and `cluster`.

use log::info;
use std::io::Write;
use wqd_api::Backend;
use wqd_samples::display::{format_optional, COLUMNS};
use wqd_samples::{ClusterRequest, Sample, SampleRow, Scenario, SummaryCard};
use wqd_utils::timestamps::to_iso;

/// Header of the samples CSV export.
pub const CSV_HEADER: [&str; 10] = [
    "id",
    "scenario",
    "site_name",
    "collected_at",
    "lat",
    "lon",
    "ph",
    "dissolved_oxygen_mg_l",
    "turbidity_ntu",
    "notes",
];

pub async fn run_list<B: Backend>(
    backend: &B,
    scenario: Option<Scenario>,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    let list = backend.list_samples(scenario).await?;
    info!("Fetched {} of {} samples", list.items.len(), list.count);

    let rows: Vec<SampleRow> = list.items.iter().map(SampleRow::local).collect();
    print!("{}", render_table(&rows));

    if let Some(path) = csv_path {
        let file = std::fs::File::create(path)?;
        write_samples_csv(file, &list.items)?;
        info!("Wrote {} samples to {}", list.items.len(), path);
    }
    Ok(())
}

pub async fn run_summaries<B: Backend>(backend: &B) -> anyhow::Result<()> {
    let summaries = backend.summaries().await?;
    for summary in &summaries {
        println!("{}", render_card(&SummaryCard::from(summary)));
    }
    Ok(())
}

pub async fn run_cluster<B: Backend>(
    backend: &B,
    scenario: Option<Scenario>,
    k: u32,
) -> anyhow::Result<()> {
    let request = ClusterRequest { scenario, k };
    let result = backend.cluster(&request).await?;
    println!("{}", result.pretty());
    Ok(())
}

/// Left-aligned text table with the dashboard's columns.
pub fn render_table(rows: &[SampleRow]) -> String {
    let mut widths = COLUMNS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, COLUMNS, &widths);
    for row in rows {
        push_line(&mut out, row.cells(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: [&str; 8], widths: &[usize; 8]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// One summary card on a single line.
pub fn render_card(card: &SummaryCard) -> String {
    format!(
        "{:<11} {:<12} {} | {} | {}",
        card.scenario.as_str(), card.count, card.avg_ph, card.avg_do, card.avg_turbidity
    )
}

/// Write samples as CSV with UTC ISO timestamps.
pub fn write_samples_csv<W: Write>(writer: W, samples: &[Sample]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for sample in samples {
        let s = &sample.sample;
        wtr.write_record([
            sample.id.to_string(),
            s.scenario.to_string(),
            s.site_name.clone().unwrap_or_default(),
            to_iso(&s.collected_at),
            s.location.lat.to_string(),
            s.location.lon.to_string(),
            optional_cell(s.ph),
            optional_cell(s.dissolved_oxygen_mg_l),
            optional_cell(s.turbidity_ntu),
            s.notes.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Empty cell for a missing measurement.
fn optional_cell(value: Option<f64>) -> String {
    match value {
        Some(_) => format_optional(value),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};
    use wqd_samples::{Location, NewSample, SampleId, ScenarioSummary};

    fn sample(id: SampleId, ph: Option<f64>, notes: Option<&str>) -> Sample {
        Sample {
            id,
            sample: NewSample {
                scenario: Scenario::Upstream,
                site_name: Some("Weir, north bank".to_string()),
                collected_at: Utc.with_ymd_and_hms(2024, 5, 1, 20, 5, 9).unwrap(),
                location: Location { lat: 12.5, lon: -70.25 },
                ph,
                dissolved_oxygen_mg_l: None,
                turbidity_ntu: Some(3.0),
                metals_mg_l: None,
                notes: notes.map(str::to_string),
                files: None,
            },
        }
    }

    #[test]
    fn test_write_samples_csv() {
        let samples = vec![
            sample(SampleId::Number(1), Some(7.2), None),
            sample(SampleId::Text("b-2".to_string()), None, Some("murky")),
        ];
        let mut buf = Vec::new();
        write_samples_csv(&mut buf, &samples).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "id,scenario,site_name,collected_at,lat,lon,ph,dissolved_oxygen_mg_l,turbidity_ntu,notes"
        );
        assert_eq!(
            lines[1],
            "1,upstream,\"Weir, north bank\",2024-05-01T20:05:09.000Z,12.5,-70.25,7.2,,3,"
        );
        assert_eq!(
            lines[2],
            "b-2,upstream,\"Weir, north bank\",2024-05-01T20:05:09.000Z,12.5,-70.25,,,3,murky"
        );
    }

    #[test]
    fn test_write_samples_csv_empty() {
        let mut buf = Vec::new();
        write_samples_csv(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let row = SampleRow::with_offset(&sample(SampleId::Number(1), Some(7.2), None), &offset);
        let table = render_table(&[row]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Scenario  Site"));
        assert!(lines[1].starts_with("upstream  Weir, north bank"));
        assert!(lines[1].contains("5/1/2024, 8:05:09 PM"));
        assert!(lines[1].ends_with("7.2  -   3"));
        // Headers line up with their cells
        assert_eq!(lines[0].find("Time"), lines[1].find("5/1/2024"));
    }

    #[test]
    fn test_render_card() {
        let summary = ScenarioSummary {
            scenario: Scenario::Dry,
            count: 4,
            avg_ph: Some(7.0),
            avg_do: None,
            avg_turbidity: Some(2.3456),
        };
        let line = render_card(&SummaryCard::from(&summary));
        assert!(line.starts_with("dry"));
        assert!(line.contains("4 samples"));
        assert!(line.contains("avg pH: 7.00 | avg DO: - | avg Turb: 2.35"));
    }
}
