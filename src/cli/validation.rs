use crate::cli::args::CliArgs;
use crate::output::OutputFormat;

pub const MAX_COLUMNS: usize = 12;
pub const MAX_DEBOUNCE_MS: u64 = 10_000;
pub const MAX_REVEAL: usize = 10_000;

pub fn validate_columns(columns: usize) -> Result<(), String> {
    if columns == 0 || columns > MAX_COLUMNS {
        return Err(format!("invalid columns {columns}, expected 1 to {MAX_COLUMNS}"));
    }
    Ok(())
}

pub fn validate_debounce(ms: u64) -> Result<(), String> {
    if ms > MAX_DEBOUNCE_MS {
        return Err(format!("invalid debounce-ms {ms}, expected at most {MAX_DEBOUNCE_MS}"));
    }
    Ok(())
}

pub fn validate_reveal(n: usize) -> Result<(), String> {
    if n > MAX_REVEAL {
        return Err(format!("invalid reveal {n}, expected at most {MAX_REVEAL}"));
    }
    Ok(())
}

pub fn validate_avatar_template(template: &str) -> Result<(), String> {
    if !template.contains("{name}") {
        return Err(format!(
            "invalid avatar-template '{template}': missing {{name}} placeholder"
        ));
    }
    Ok(())
}

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(columns) = args.columns {
        validate_columns(columns)?;
    }
    if let Some(ms) = args.debounce_ms {
        validate_debounce(ms)?;
    }
    if let Some(n) = args.reveal {
        validate_reveal(n)?;
    }
    if let Some(raw) = args.output_format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}': expected text, json or html"
            ));
        }
    }
    if args.interactive && args.output.is_some() {
        return Err("use either --interactive or --output, not both".to_string());
    }
    Ok(())
}
