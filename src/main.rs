// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use notion_props::{
    decode_properties, encode_pretty, encode_value, AnyProperties, CommandLineInput, ContextKind,
    DatabaseContext, DatabaseProperties, DatabaseProperty, InspectConfig, OutputMode, PageContext,
    PageProperties, PageProperty, Properties, PropertyContext, SUMMARY_VALUE_PREVIEW_LENGTH,
};
use std::io::Read;

/// Sets up logging configuration. Logs go to stderr so stdout stays
/// parseable in JSON mode.
fn setup_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .build(Root::builder().appender("stderr").build(log_level))?;

    log4rs::init_config(config)?;
    Ok(())
}

fn read_input(config: &InspectConfig) -> Result<Vec<u8>> {
    match &config.input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read properties from stdin")?;
            Ok(buffer)
        }
    }
}

fn decode_input(bytes: &[u8], config: &InspectConfig) -> Result<AnyProperties> {
    let decoded = match config.context {
        ContextKind::Database => {
            decode_properties::<DatabaseContext>(bytes, &config.decode).map(AnyProperties::Database)
        }
        ContextKind::Page => {
            decode_properties::<PageContext>(bytes, &config.decode).map(AnyProperties::Page)
        }
    };
    decoded.with_context(|| format!("Failed to decode {} properties", config.context))
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(SUMMARY_VALUE_PREVIEW_LENGTH).collect();
    if chars.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}

fn page_preview(property: &PageProperty) -> String {
    if let Some(text) = property.as_plain_text() {
        return preview(&text);
    }
    match property {
        PageProperty::Number(number) => number.value().map(|n| n.to_string()).unwrap_or_default(),
        PageProperty::Checkbox(checkbox) => checkbox.checkbox.to_string(),
        PageProperty::MultiSelect(select) => preview(
            &select
                .multi_select
                .iter()
                .map(|option| option.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        PageProperty::Date(date) => date
            .date
            .as_ref()
            .map(|d| match &d.end {
                Some(end) => format!("{} → {}", d.start, end),
                None => d.start.clone(),
            })
            .unwrap_or_default(),
        PageProperty::Relation(relation) => format!("{} page(s)", relation.pages().len()),
        PageProperty::People(people) => format!("{} user(s)", people.people.len()),
        PageProperty::Files(files) => format!("{} file(s)", files.files.len()),
        _ => String::new(),
    }
}

fn schema_preview(property: &DatabaseProperty) -> String {
    if let Some(options) = property.options() {
        return preview(
            &options
                .iter()
                .map(|option| option.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }
    match property {
        DatabaseProperty::Formula(formula) => preview(&formula.formula.expression),
        DatabaseProperty::Number(number) => number
            .format()
            .map(|format| format!("{:?}", format))
            .unwrap_or_default(),
        DatabaseProperty::Relation(relation) => match relation.config() {
            Some(config) => match config.target_database() {
                Ok(database) => format!("→ {}", database.to_dashed()),
                Err(e) => {
                    log::warn!("{}", e);
                    format!("→ {}", config.database_id)
                }
            },
            None => String::new(),
        },
        _ => String::new(),
    }
}

fn print_summary<C, F>(properties: &Properties<C>, describe: F)
where
    C: PropertyContext,
    F: Fn(&C::Property) -> (String, String, String),
{
    let width = properties
        .keys()
        .map(|name| name.as_str().chars().count())
        .max()
        .unwrap_or(0);

    for (name, property) in properties {
        let (tag, variant, detail) = describe(property);
        println!(
            "{:<width$}  {:<16}  {:<18}  {}",
            name.as_str(),
            tag,
            variant,
            detail,
            width = width
        );
    }
}

fn print_page_summary(properties: &PageProperties) {
    print_summary(properties, |p: &PageProperty| {
        (
            p.property_type().to_string(),
            p.variant().to_string(),
            page_preview(p),
        )
    });
}

fn print_schema_summary(properties: &DatabaseProperties) {
    print_summary(properties, |p: &DatabaseProperty| {
        (
            p.property_type().to_string(),
            p.variant().to_string(),
            schema_preview(p),
        )
    });
}

fn print_json<C: PropertyContext>(properties: &Properties<C>, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        encode_pretty(properties)?
    } else {
        encode_value(properties)?.to_string()
    };
    println!("{}", rendered);
    Ok(())
}

fn report(properties: &AnyProperties, config: &InspectConfig) -> Result<()> {
    match (config.output, properties) {
        (OutputMode::Summary, AnyProperties::Page(page)) => print_page_summary(page),
        (OutputMode::Summary, AnyProperties::Database(schema)) => print_schema_summary(schema),
        (OutputMode::Json, AnyProperties::Page(page)) => print_json(page, config.pretty)?,
        (OutputMode::Json, AnyProperties::Database(schema)) => print_json(schema, config.pretty)?,
        (OutputMode::Debug, any) if config.pretty => println!("{:#?}", any),
        (OutputMode::Debug, any) => println!("{:?}", any),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = InspectConfig::resolve(cli);
    log::debug!("Resolved configuration: {:?}", config);

    let bytes = read_input(&config)?;
    let properties = decode_input(&bytes, &config)?;
    log::info!(
        "Decoded {} {} properties",
        properties.len(),
        properties.context()
    );

    report(&properties, &config)
}
