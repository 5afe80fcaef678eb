use std::env;
use std::fs;
use std::path::Path;

// Keys forwarded from .env into option_env!() at compile time.
const FORWARDED_KEYS: &[&str] = &[
    "BACKEND_URL",
    "MAP_PROVIDER_KEY",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                let Some((key, value)) = line.split_once('=') else {
                    continue;
                };
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                if !FORWARDED_KEYS.contains(&key) {
                    continue;
                }

                // Variables already set in the shell win over .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in defaults (BACKEND_URL=http://127.0.0.1:8000).");
    }

    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
