//! Command implementations for the water quality CLI.
//!
//! Each subcommand maps onto one backend operation; the sample form is
//! assembled from flags and goes through the same conversion as the dashboard.

use clap::Subcommand;
use wqd_api::Backend;
use wqd_samples::{Scenario, DEFAULT_CLUSTER_COUNT};

pub mod report;
pub mod submit;

#[derive(Subcommand)]
pub enum Command {
    /// Record a new sample
    Submit {
        /// Sampling scenario (dry, monsoon, upstream, downstream, industrial)
        #[arg(short, long, default_value = "dry")]
        scenario: Scenario,

        /// Site name
        #[arg(long, default_value = "")]
        site: String,

        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: String,

        /// Collection time (RFC 3339 or `YYYY-MM-DD HH:MM:SS`)
        #[arg(long, default_value = "", conflicts_with = "now")]
        collected_at: String,

        /// Stamp the collection time with the current time
        #[arg(long)]
        now: bool,

        /// pH
        #[arg(long, default_value = "")]
        ph: String,

        /// Dissolved oxygen (mg/L)
        #[arg(long = "do", default_value = "")]
        dissolved_oxygen: String,

        /// Turbidity (NTU)
        #[arg(long, default_value = "")]
        turbidity: String,

        /// Metals as a JSON object of mg/L values, e.g. '{"Pb": 0.01}'
        #[arg(long, default_value = "{}")]
        metals: String,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List samples, optionally for one scenario
    List {
        /// Only list this scenario
        #[arg(short, long)]
        scenario: Option<Scenario>,

        /// Also write the listing to this CSV path
        #[arg(long)]
        csv: Option<String>,
    },

    /// Show per-scenario averages
    Summaries,

    /// Run clustering on the backend and print the result
    Cluster {
        /// Restrict clustering to one scenario
        #[arg(short, long)]
        scenario: Option<Scenario>,

        /// Number of clusters
        #[arg(short, long, default_value_t = DEFAULT_CLUSTER_COUNT)]
        k: u32,
    },
}

pub async fn run<B: Backend>(backend: &B, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Submit {
            scenario,
            site,
            lat,
            lon,
            collected_at,
            now,
            ph,
            dissolved_oxygen,
            turbidity,
            metals,
            notes,
        } => {
            let mut form = wqd_samples::SampleForm {
                scenario,
                site_name: site,
                lat,
                lon,
                collected_at,
                ph,
                dissolved_oxygen_mg_l: dissolved_oxygen,
                turbidity_ntu: turbidity,
                metals_mg_l: metals,
                notes,
            };
            if now {
                form.stamp_now(&wqd_utils::clock::SystemClock);
            }
            submit::run_submit(backend, &form).await.map(|_| ())
        }
        Command::List { scenario, csv } => {
            report::run_list(backend, scenario, csv.as_deref()).await
        }
        Command::Summaries => report::run_summaries(backend).await,
        Command::Cluster { scenario, k } => report::run_cluster(backend, scenario, k).await,
    }
}
