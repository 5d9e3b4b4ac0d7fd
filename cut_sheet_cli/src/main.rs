use clap::{Parser, Subcommand};
use cut_sheet::io::{read_profile_input_json, write_profile_csv, write_profile_json};
use cut_sheet::profile::{build_profile, grade, Profile, ProfileInput};
use cut_sheet::station::{format_station, parse_stations};

/// Command line interface for generating slope cut sheets.
#[derive(Parser)]
#[command(name = "cut_sheet_cli", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a cut sheet between two stations.
    CutSheet {
        begin_station: f64,
        end_station: f64,
        begin_elevation: f64,
        end_elevation: f64,
        /// Station increment between generated rows.
        #[arg(long, default_value_t = 25.0)]
        increment: f64,
        /// Additional comma-separated station values.
        #[arg(long)]
        stations: Option<String>,
        /// Write the table to a CSV file.
        #[arg(long)]
        output: Option<String>,
        /// Write the computed profile to a JSON file.
        #[arg(long)]
        json: Option<String>,
    },
    /// Generate a cut sheet from a JSON parameter file.
    CutSheetFile {
        input: String,
        /// Write the table to a CSV file.
        #[arg(long)]
        output: Option<String>,
        /// Write the computed profile to a JSON file.
        #[arg(long)]
        json: Option<String>,
    },
    /// Compute the grade percentage between two stations.
    Slope {
        begin_station: f64,
        end_station: f64,
        begin_elevation: f64,
        end_elevation: f64,
    },
    /// Format a station value using station notation.
    FormatStation { station: f64 },
}

fn print_profile(profile: &Profile) {
    println!("Slope: {:.2}%", profile.slope_percent);
    println!("Station,Elevation (ft)");
    for point in &profile.points {
        println!("{},{}", point.label, point.elevation);
    }
}

fn export_profile(profile: &Profile, output: Option<&str>, json: Option<&str>) {
    if let Some(path) = output {
        match write_profile_csv(path, profile) {
            Ok(()) => println!("Wrote {}", path),
            Err(e) => eprintln!("Error writing {}: {}", path, e),
        }
    }
    if let Some(path) = json {
        match write_profile_json(path, profile) {
            Ok(()) => println!("Wrote {}", path),
            Err(e) => eprintln!("Error writing {}: {}", path, e),
        }
    }
}

fn run_profile(input: &ProfileInput, output: Option<&str>, json: Option<&str>) {
    match build_profile(input) {
        Ok(profile) => {
            print_profile(&profile);
            export_profile(&profile, output, json);
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::CutSheet {
            begin_station,
            end_station,
            begin_elevation,
            end_elevation,
            increment,
            stations,
            output,
            json,
        } => {
            let extra_stations = match stations.as_deref() {
                Some(text) => match parse_stations(text) {
                    Ok(stas) => stas,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return;
                    }
                },
                None => Vec::new(),
            };
            let input = ProfileInput {
                begin_station,
                end_station,
                begin_elevation,
                end_elevation,
                increment,
                extra_stations,
            };
            run_profile(&input, output.as_deref(), json.as_deref());
        }
        Commands::CutSheetFile {
            input,
            output,
            json,
        } => match read_profile_input_json(&input) {
            Ok(params) => run_profile(&params, output.as_deref(), json.as_deref()),
            Err(e) => eprintln!("Error reading {}: {}", input, e),
        },
        Commands::Slope {
            begin_station,
            end_station,
            begin_elevation,
            end_elevation,
        } => match grade(begin_station, end_station, begin_elevation, end_elevation) {
            Ok(slope) => println!("Slope: {:.2}%", slope * 100.0),
            Err(e) => eprintln!("Error: {}", e),
        },
        Commands::FormatStation { station } => {
            println!("{}", format_station(station));
        }
    }
}
