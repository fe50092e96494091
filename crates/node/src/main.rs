use bscd_log as logging;

macro_rules! log_at {
    ($level:expr, $($arg:tt)*) => {{
        if crate::logging::enabled($level) {
            crate::logging::log($level, module_path!(), file!(), line!(), format_args!($($arg)*));
        }
    }};
}

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        log_at!(crate::logging::Level::Warn, $($arg)*);
    }};
}

macro_rules! log_info {
    ($($arg:tt)*) => {{
        log_at!(crate::logging::Level::Info, $($arg)*);
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        log_at!(crate::logging::Level::Debug, $($arg)*);
    }};
}

mod summary;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bscd_chainparams::ParamsRegistry;
use bscd_consensus::Network;

pub use summary::{render_json, render_text};

const SUPPORTED_CONF_KEYS: [&str; 5] = ["logformat", "loglevel", "logtimestamps", "regtest", "testnet"];

#[derive(Clone, Debug, PartialEq, Eq)]
struct Config {
    conf_path: Option<PathBuf>,
    network: Network,
    log_level: logging::Level,
    log_format: logging::Format,
    log_timestamps: bool,
    print_seeds: bool,
    json: bool,
    unsupported_conf_keys: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum CliAction {
    Run(Config),
    PrintHelp,
    PrintVersion,
}

pub fn run_entry() -> Result<(), String> {
    match parse_args()? {
        CliAction::PrintHelp => {
            println!("{}", usage());
            Ok(())
        }
        CliAction::PrintVersion => {
            println!("bscd {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliAction::Run(config) => {
            let output = run_with_config(&config)?;
            print!("{output}");
            Ok(())
        }
    }
}

/// Builds every network's parameters, selects the configured one and renders
/// its summary.
fn run_with_config(config: &Config) -> Result<String, String> {
    logging::init(logging::LogConfig {
        level: config.log_level,
        format: config.log_format,
        timestamps: config.log_timestamps,
    });
    if let Some(conf_file) = config.conf_path.as_deref() {
        if !config.unsupported_conf_keys.is_empty() {
            log_warn!(
                "Warning: ignoring unsupported keys in {}: {}",
                conf_file.display(),
                config.unsupported_conf_keys.join(", ")
            );
        }
    }

    let registry = ParamsRegistry::new().map_err(|err| err.to_string())?;
    registry
        .select(config.network)
        .map_err(|err| err.to_string())?;
    let params = registry.current();
    log_info!(
        "Using {} network parameters (genesis {})",
        params.name(),
        bscd_consensus::hash256_to_hex(&params.genesis_hash)
    );
    log_debug!(
        "{} fixed seeds, {} dns seeds",
        params.fixed_seeds.len(),
        params.dns_seeds().len()
    );

    if config.json {
        let value = render_json(&params, config.print_seeds);
        serde_json::to_string_pretty(&value)
            .map(|mut text| {
                text.push('\n');
                text
            })
            .map_err(|err| err.to_string())
    } else {
        Ok(render_text(&params, config.print_seeds))
    }
}

fn parse_args() -> Result<CliAction, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(raw_args: I) -> Result<CliAction, String>
where
    I: IntoIterator<Item = String>,
{
    let mut conf_path: Option<PathBuf> = None;
    let mut network = Network::Mainnet;
    let mut network_set = false;
    let mut log_level = logging::Level::Info;
    let mut log_level_set = false;
    let mut log_format = logging::Format::Text;
    let mut log_format_set = false;
    let mut log_timestamps = true;
    let mut log_timestamps_set = false;
    let mut print_seeds = false;
    let mut json = false;

    let mut args = raw_args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--conf" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --conf\n{}", usage()))?;
                conf_path = Some(PathBuf::from(value));
            }
            "--testnet" => {
                network = Network::Testnet;
                network_set = true;
            }
            "--network" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --network\n{}", usage()))?;
                network = Network::parse(&value)
                    .ok_or_else(|| format!("invalid network '{value}'\n{}", usage()))?;
                network_set = true;
            }
            "--log-level" | "--loglevel" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --log-level\n{}", usage()))?;
                log_level = logging::Level::parse(&value)
                    .ok_or_else(|| format!("invalid log level '{value}'\n{}", usage()))?;
                log_level_set = true;
            }
            "--log-format" | "--logformat" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for --log-format\n{}", usage()))?;
                log_format = logging::Format::parse(&value)
                    .ok_or_else(|| format!("invalid log format '{value}'\n{}", usage()))?;
                log_format_set = true;
            }
            "--log-timestamps" | "--logtimestamps" => {
                log_timestamps = true;
                log_timestamps_set = true;
            }
            "--no-log-timestamps" | "--no-logtimestamps" => {
                log_timestamps = false;
                log_timestamps_set = true;
            }
            "--print-seeds" => print_seeds = true,
            "--json" => json = true,
            "--help" | "-h" => return Ok(CliAction::PrintHelp),
            "--version" | "-V" => return Ok(CliAction::PrintVersion),
            other => {
                return Err(format!("unknown argument '{other}'\n{}", usage()));
            }
        }
    }

    let mut unsupported_conf_keys: Vec<String> = Vec::new();
    if let Some(conf_file) = conf_path.as_deref() {
        let conf = load_conf(conf_file)?
            .ok_or_else(|| format!("config file {} not found", conf_file.display()))?;

        if !network_set {
            if conf_flag(&conf, "regtest", conf_file)? == Some(true) {
                network = Network::Regtest;
            } else if conf_flag(&conf, "testnet", conf_file)? == Some(true) {
                network = Network::Testnet;
            }
        }

        if !log_level_set {
            if let Some(raw) = conf_last(&conf, "loglevel") {
                log_level = logging::Level::parse(raw).ok_or_else(|| {
                    format!("invalid loglevel '{raw}' in {}", conf_file.display())
                })?;
            }
        }

        if !log_format_set {
            if let Some(raw) = conf_last(&conf, "logformat") {
                log_format = logging::Format::parse(raw).ok_or_else(|| {
                    format!("invalid logformat '{raw}' in {}", conf_file.display())
                })?;
            }
        }

        if !log_timestamps_set {
            if let Some(value) = conf_flag(&conf, "logtimestamps", conf_file)? {
                log_timestamps = value;
            }
        }

        unsupported_conf_keys = conf
            .keys()
            .filter(|key| !SUPPORTED_CONF_KEYS.contains(&key.as_str()))
            .cloned()
            .collect();
        unsupported_conf_keys.sort();
    }

    Ok(CliAction::Run(Config {
        conf_path,
        network,
        log_level,
        log_format,
        log_timestamps,
        print_seeds,
        json,
        unsupported_conf_keys,
    }))
}

fn conf_last<'a>(conf: &'a HashMap<String, Vec<String>>, key: &str) -> Option<&'a str> {
    conf.get(key)
        .and_then(|values| values.last())
        .map(String::as_str)
}

fn conf_flag(
    conf: &HashMap<String, Vec<String>>,
    key: &str,
    conf_file: &Path,
) -> Result<Option<bool>, String> {
    match conf_last(conf, key) {
        None => Ok(None),
        Some(raw) => parse_conf_bool(raw)
            .map(Some)
            .ok_or_else(|| format!("invalid {key} value '{raw}' in {}", conf_file.display())),
    }
}

/// Reads `key=value` lines. `#` and `;` start comments, a bare key means
/// `1`, and repeated keys keep every value in file order.
fn load_conf(path: &Path) -> Result<Option<HashMap<String, Vec<String>>>, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(format!("failed to read {}: {err}", path.display())),
    };

    let mut out: HashMap<String, Vec<String>> = HashMap::new();
    for raw_line in contents.lines() {
        let line = raw_line
            .split(['#', ';'])
            .next()
            .unwrap_or_default()
            .trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (line, "1"),
        };
        if key.is_empty() {
            continue;
        }
        out.entry(key.to_ascii_lowercase())
            .or_default()
            .push(value.to_string());
    }
    Ok(Some(out))
}

fn parse_conf_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn usage() -> String {
    [
        "Usage:",
        "  bscd [options]",
        "",
        "Options:",
        "  --help, -h             Print this help and exit",
        "  --version, -V          Print version and exit",
        "  --conf <path>          Read settings from a config file",
        "                         (keys: testnet, regtest, loglevel, logformat, logtimestamps)",
        "  --testnet              Use the test network",
        "  --network <name>       Network to use: main, test or regtest (default: main)",
        "  --log-level <level>    error, warn, info, debug or trace (default: info)",
        "  --log-format <format>  text or json (default: text)",
        "  --log-timestamps       Prefix text log lines with a timestamp (default)",
        "  --no-log-timestamps    Omit timestamps from text log lines",
        "  --print-seeds          List DNS and fixed seed peers",
        "  --json                 Print the parameter summary as JSON",
        "",
        "Command line options override config file values.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    fn run_config(raw: &[&str]) -> Config {
        match parse_args_from(args(raw)).expect("parse") {
            CliAction::Run(config) => config,
            other => panic!("unexpected action {other:?}"),
        }
    }

    fn conf_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write conf");
        file
    }

    #[test]
    fn defaults_to_mainnet() {
        let config = run_config(&[]);
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.log_level, logging::Level::Info);
        assert_eq!(config.log_format, logging::Format::Text);
        assert!(config.log_timestamps);
        assert!(!config.json);
    }

    #[test]
    fn testnet_flag_and_network_option() {
        assert_eq!(run_config(&["--testnet"]).network, Network::Testnet);
        assert_eq!(run_config(&["--network", "test"]).network, Network::Testnet);
        assert_eq!(run_config(&["--network", "regtest"]).network, Network::Regtest);
        assert!(parse_args_from(args(&["--network", "signet"])).is_err());
        assert!(parse_args_from(args(&["--network"])).is_err());
    }

    #[test]
    fn help_version_and_unknown() {
        assert_eq!(
            parse_args_from(args(&["--help"])).expect("help"),
            CliAction::PrintHelp
        );
        assert_eq!(
            parse_args_from(args(&["-V"])).expect("version"),
            CliAction::PrintVersion
        );
        let err = parse_args_from(args(&["--bogus"])).unwrap_err();
        assert!(err.starts_with("unknown argument '--bogus'"), "{err}");
    }

    #[test]
    fn conf_file_selects_testnet_and_logging() {
        let file = conf_file(
            "# node settings\ntestnet=1\nloglevel = debug ; noisy\nlogformat=json\nlogtimestamps=no\nrpcport=1\n",
        );
        let path = file.path().to_string_lossy().into_owned();
        let config = run_config(&["--conf", path.as_str()]);
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.log_level, logging::Level::Debug);
        assert_eq!(config.log_format, logging::Format::Json);
        assert!(!config.log_timestamps);
        assert_eq!(config.unsupported_conf_keys, vec!["rpcport".to_string()]);
        assert_eq!(config.conf_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn command_line_overrides_conf_file() {
        let file = conf_file("testnet=1\nloglevel=debug\nlogtimestamps=0\n");
        let path = file.path().to_string_lossy().into_owned();
        let config = run_config(&[
            "--conf",
            path.as_str(),
            "--network",
            "main",
            "--log-level",
            "warn",
            "--log-timestamps",
        ]);
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.log_level, logging::Level::Warn);
        assert!(config.log_timestamps);
    }

    #[test]
    fn bare_conf_key_means_enabled() {
        let file = conf_file("testnet\n");
        let path = file.path().to_string_lossy().into_owned();
        assert_eq!(run_config(&["--conf", path.as_str()]).network, Network::Testnet);

        let file = conf_file("testnet=0\n");
        let path = file.path().to_string_lossy().into_owned();
        assert_eq!(run_config(&["--conf", path.as_str()]).network, Network::Mainnet);
    }

    #[test]
    fn invalid_conf_values_are_errors() {
        let file = conf_file("testnet=maybe\n");
        let path = file.path().to_string_lossy().into_owned();
        let err = parse_args_from(args(&["--conf", path.as_str()])).unwrap_err();
        assert!(err.contains("invalid testnet value 'maybe'"), "{err}");

        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("bscd.conf");
        let missing = missing.to_str().expect("utf-8 path");
        let err = parse_args_from(args(&["--conf", missing])).unwrap_err();
        assert!(err.contains("not found"), "{err}");
    }

    #[test]
    fn load_conf_keeps_repeated_values() {
        let file = conf_file("LogLevel=info\nloglevel=trace\n; comment\n=orphan\n");
        let conf = load_conf(file.path()).expect("read").expect("exists");
        assert_eq!(
            conf.get("loglevel"),
            Some(&vec!["info".to_string(), "trace".to_string()])
        );
        assert_eq!(conf.len(), 1);
    }

    #[test]
    fn parse_conf_bool_values() {
        assert_eq!(parse_conf_bool(""), Some(true));
        assert_eq!(parse_conf_bool("Yes"), Some(true));
        assert_eq!(parse_conf_bool("0"), Some(false));
        assert_eq!(parse_conf_bool("off"), None);
    }

    #[test]
    fn summary_for_selected_network() {
        let config = run_config(&["--testnet", "--print-seeds"]);
        let text = run_with_config(&config).expect("summary");
        assert!(text.contains("network: test"));
        assert!(text.contains("message start: 1d7ea62c"));
        assert!(text.contains(
            "genesis hash: 43abf28608e00e5fa810cdff37c96d48b4c69029454456bba1058c6798519180"
        ));
        assert!(text.contains("pow limit: 0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff (0x1f00ffff)"));
        assert!(text.contains("zero pubkey address: t6vc3nrbAurGs3i17HJUavZuw4ioKTiFCE"));
        assert!(text.contains("fixed seeds: 0"));
    }

    #[test]
    fn json_summary_lists_seeds() {
        let config = run_config(&["--json", "--print-seeds"]);
        let text = run_with_config(&config).expect("summary");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["network"], "main");
        assert_eq!(value["default_port"], 42_515);
        assert_eq!(value["base58_prefixes"]["pubkey_address"], "1a");
        assert_eq!(value["base58_prefixes"]["ext_public_key"], "0488b21e");
        assert_eq!(value["fixed_seeds"].as_array().map(Vec::len), Some(9));
        assert_eq!(value["fixed_seeds"][0]["addr"], "95.216.33.137:42515");
        assert_eq!(value["dns_seeds"][8]["host"], "145.239.39.138");
    }

    #[test]
    fn regtest_is_rejected_at_startup() {
        let config = run_config(&["--network", "regtest"]);
        let err = run_with_config(&config).unwrap_err();
        assert_eq!(err, "no parameter set for network regtest");
    }
}
