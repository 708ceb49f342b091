// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use itertools::Itertools;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <input_file>", args[0]);
        std::process::exit(1)
    }

    let path = &args[1];

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            println!("Error: {}", error);
            std::process::exit(1)
        }
    };

    let mut input_data = String::new();
    if let Err(error) = file.read_to_string(&mut input_data) {
        println!("Error: {}", error);
        std::process::exit(1)
    }
    let input_data: serde_json::Value = match serde_json::from_str(&input_data) {
        Ok(value) => value,
        Err(error) => {
            println!("Error: {}", error);
            std::process::exit(1)
        }
    };
    println!("\n---------- RUN: {} ----------", path);

    let output = match internal::run(input_data) {
        Ok(output) => output,
        Err(error) => {
            println!("Error: {}", error);
            std::process::exit(1)
        }
    };

    if let Some(events) = output["events"].as_array() {
        for event in events {
            if let Some(message) = event["message"].as_str() {
                println!("{}", message);
            }
        }
    }
    println!(
        "Occupied slots: [{}]",
        output["occupiedSlots"]
            .as_array()
            .map(|slots| slots.iter().join(", "))
            .unwrap_or_default()
    );
    println!("Total fees: {}", output["totalFees"]);

    // output path with sub-directory creation
    let output_dir_name = "output";
    let result = ensure_output_path(path, output_dir_name).and_then(|output_path| {
        let file = File::create(&output_path)?;
        serde_json::to_writer_pretty(file, &output)?;
        Ok(output_path)
    });
    match result {
        Ok(output_path) => println!("Output written to {}", output_path),
        Err(error) => {
            println!("Error writing output: {}", error);
            std::process::exit(1)
        }
    }

    std::process::exit(0)
}

fn ensure_output_path(input_path: &str, output_dir_name: &str) -> std::io::Result<String> {
    let file_name = Path::new(input_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("instance.json");
    let output_path = format!("{}/output_{}", output_dir_name, file_name);
    if let Some(parent_dir) = Path::new(&output_path).parent() {
        fs::create_dir_all(parent_dir)?;
    }
    Ok(output_path)
}
