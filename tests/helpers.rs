// Shared test helpers for fixture WHOIS output and run configuration.

use std::path::{Path, PathBuf};

use whois_csv::Config;

/// Trimmed-down registrar output in the common ICANN layout.
#[allow(dead_code)] // Used by other test files
pub const SAMPLE_WHOIS: &str = "Domain Name: EXAMPLE.COM\r
Registry Domain ID: 2336799_DOMAIN_COM-VRSN\r
Registrar WHOIS Server: whois.example-registrar.com\r
Registrar: Example Registrar, LLC\r
Registrant Name: Jane Doe\r
Registrant Organization: Example Holdings\r
Registrant Street: 123 Main\r
Registrant Street: Apt 4\r
Registrant City: Springfield\r
Registrant State/Province: IL\r
Registrant Postal Code: 62701\r
Registrant Country: US\r
Registrant Phone: +1.2175550100\r
Registrant Phone Ext: \r
Registrant Fax: +1.2175550101\r
Registrant Fax Ext: 9\r
Registrant Email: jane@example.com\r
Admin Name: Ops Team\r
Admin Email: ops@example.com\r
Tech Name: NOC\r
Tech Email: a:b@example.com\r
Name Server: NS1.EXAMPLE.COM\r
>>> Last update of WHOIS database: 2024-01-01T00:00:00Z <<<\r
";

/// Writes `contents` to `<dir>/<name>` and returns the path.
#[allow(dead_code)] // Used by other test files
pub fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write WHOIS input");
    path
}

/// Config that formats `input` for `domain` into `output_dir`.
#[allow(dead_code)] // Used by other test files
pub fn offline_config(domain: &str, input: PathBuf, output_dir: &Path) -> Config {
    Config {
        domain: domain.to_string(),
        input: Some(input),
        output_dir: output_dir.to_path_buf(),
        ..Default::default()
    }
}

/// Asserts every line has the `<Role> <Field>[:],<value>` shape.
#[allow(dead_code)] // Used by other test files
pub fn assert_row_shape(csv: &str) {
    for line in csv.lines() {
        let (label, _) = line
            .split_once(',')
            .unwrap_or_else(|| panic!("Row without comma: {line:?}"));
        assert!(
            label.starts_with("Registrant ")
                || label.starts_with("Admin ")
                || label.starts_with("Tech "),
            "Unexpected row label: {label:?}"
        );
    }
}
