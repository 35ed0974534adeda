use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;

use cirrus_aws::validation::{self, ValidateOptions};
use cirrus_core::schema::{AttributeSchema, ResourceSchema};
use cirrus_core::skeleton::{self, SkeletonOptions};
use cirrus_core::template::Template;

#[derive(Parser)]
#[command(name = "cirrus")]
#[command(about = "Typed CloudFormation resource records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List resource types in the catalog
    List {
        /// Only list types of this service namespace (e.g., Cassandra)
        #[arg(long, short)]
        service: Option<String>,
    },
    /// Show the properties and attributes of a resource type
    Describe {
        /// CloudFormation type name (e.g., AWS::Cassandra::Table)
        resource_type: String,
    },
    /// Print a placeholder template entry for a resource type
    Skeleton {
        /// CloudFormation type name (e.g., AWS::Cassandra::Table)
        resource_type: String,

        /// Include optional properties
        #[arg(long)]
        all: bool,
    },
    /// Validate the resources of a CloudFormation JSON template
    Validate {
        /// Path to template file
        file: PathBuf,

        /// Fail on resource types missing from the catalog
        #[arg(long)]
        deny_unknown_types: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { service } => list_types(service.as_deref()).map(|out| print!("{}", out)),
        Commands::Describe { resource_type } => {
            describe(&resource_type).map(|out| print!("{}", out))
        }
        Commands::Skeleton { resource_type, all } => {
            let options = SkeletonOptions {
                include_optional: all,
            };
            run_skeleton(&resource_type, &options)
        }
        Commands::Validate {
            file,
            deny_unknown_types,
        } => {
            let options = ValidateOptions { deny_unknown_types };
            run_validate(&file, &options)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn lookup(resource_type: &str) -> Result<&'static ResourceSchema> {
    cirrus_aws::find_schema(resource_type)
        .with_context(|| format!("Unknown resource type '{}'", resource_type))
}

fn list_types(service: Option<&str>) -> Result<String> {
    let mut out = String::new();
    let mut matched = false;

    for (name, schemas) in cirrus_aws::services() {
        if let Some(filter) = service
            && !name.eq_ignore_ascii_case(filter)
        {
            continue;
        }
        matched = true;
        for schema in schemas() {
            out.push_str(&schema.resource_type);
            out.push('\n');
        }
    }

    if let Some(filter) = service
        && !matched
    {
        bail!("Unknown service '{}'", filter);
    }
    Ok(out)
}

fn describe(resource_type: &str) -> Result<String> {
    let schema = lookup(resource_type)?;
    let mut out = format!("{}\n", schema.resource_type);
    if let Some(description) = &schema.description {
        out.push_str(&format!("  {}\n", description));
    }

    out.push_str("\nProperties:\n");
    let width = schema
        .properties
        .attributes
        .iter()
        .map(|a| a.key().len())
        .max()
        .unwrap_or(0);
    for attr in &schema.properties.attributes {
        out.push_str(&describe_attribute(attr, width));
    }

    if !schema.attributes.is_empty() {
        out.push_str("\nAttributes:\n");
        for name in &schema.attributes {
            out.push_str(&format!("  {}\n", name));
        }
    }

    out.push_str(&format!(
        "\nTaggable: {}\n",
        if schema.taggable { "yes" } else { "no" }
    ));
    Ok(out)
}

fn describe_attribute(attr: &AttributeSchema, width: usize) -> String {
    format!(
        "  {:width$}  {}{}\n",
        attr.key(),
        attr.attr_type,
        if attr.required { "  (required)" } else { "" },
        width = width
    )
}

fn skeleton_entry(resource_type: &str, options: &SkeletonOptions) -> Result<serde_json::Value> {
    Ok(skeleton::skeleton(lookup(resource_type)?, options))
}

fn run_skeleton(resource_type: &str, options: &SkeletonOptions) -> Result<()> {
    let entry = skeleton_entry(resource_type, options)?;
    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}

fn load_template(file: &Path) -> Result<Template> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let template = Template::from_json(&content)
        .with_context(|| format!("Failed to parse {}", file.display()))?;
    log::debug!(
        "loaded {} resources from {}",
        template.resources.len(),
        file.display()
    );
    Ok(template)
}

fn validate_file(file: &Path, options: &ValidateOptions) -> Result<Template> {
    let template = load_template(file)?;

    if let Err(errors) = validation::validate_template(&template, options) {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        bail!("{}", messages.join("\n"));
    }

    Ok(template)
}

fn run_validate(file: &Path, options: &ValidateOptions) -> Result<()> {
    println!("{}", "Validating...".cyan());

    let template = validate_file(file, options)?;

    println!(
        "{}",
        format!(
            "✓ {} resources validated successfully.",
            template.resources.len()
        )
        .green()
        .bold()
    );

    for resource in &template.resources {
        println!("  • {} ({})", resource.id.logical_id, resource.id.resource_type);
    }

    Ok(())
}
