//! CLI command implementations

use anyhow::Context;
use dynkin_core::{CartanType, DisplayOptions, DynkinError, validate_labels};
use dynkin_types::root_system;
use std::path::Path;

use crate::LabelArgs;

type BoxedLabel = Box<dyn Fn(usize) -> String>;

/// Display options from the config file, overridden by command-line flags.
pub fn display_options(
    config: Option<&Path>,
    mark_special_node: Option<&str>,
    special_node_str: Option<&str>,
) -> anyhow::Result<DisplayOptions> {
    let mut options = match config {
        Some(path) => DisplayOptions::load(path)
            .with_context(|| format!("Cannot read display options from {}", path.display()))?,
        None => DisplayOptions::default(),
    };

    if let Some(mark) = mark_special_node {
        options.mark_special_node = mark.parse()?;
    }
    if let Some(glyph) = special_node_str {
        options.special_node_str = glyph.to_string();
    }
    options.validate()?;

    tracing::debug!(
        mark_special_node = %options.mark_special_node,
        special_node_str = %options.special_node_str,
        "Display options resolved"
    );
    Ok(options)
}

pub fn ascii(text: &str, dual: bool, labels: &LabelArgs, options: &DisplayOptions) -> anyhow::Result<()> {
    let mut cartan_type = parse_cartan_type(text)?;
    if dual {
        cartan_type = cartan_type.dual();
    }
    let system = root_system(&cartan_type)?;
    let label = label_fn(labels, &cartan_type)?;

    println!("{}", system.ascii_art(&*label, options));
    Ok(())
}

pub fn latex(
    text: &str,
    node_dist: f64,
    dual: bool,
    labels: &LabelArgs,
    options: &DisplayOptions,
) -> anyhow::Result<()> {
    if !(node_dist.is_finite() && node_dist > 0.0) {
        anyhow::bail!("Node distance must be a positive number, got {}", node_dist);
    }
    let cartan_type = parse_cartan_type(text)?;
    let system = root_system(&cartan_type)?;
    let label = label_fn(labels, &cartan_type)?;

    println!("{}", system.latex_dynkin_diagram(&*label, node_dist, dual, options));
    Ok(())
}

pub fn edges(text: &str, json: bool) -> anyhow::Result<()> {
    let cartan_type = parse_cartan_type(text)?;
    let diagram = root_system(&cartan_type)?.dynkin_diagram();
    tracing::debug!(
        "{}: {} nodes, {} edges",
        cartan_type,
        diagram.node_count(),
        diagram.edge_count()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&diagram.edges())?);
    } else {
        for edge in diagram.edges() {
            println!("{}", edge);
        }
    }
    Ok(())
}

pub fn info(text: &str, options: &DisplayOptions) -> anyhow::Result<()> {
    let cartan_type = parse_cartan_type(text)?;
    let diagram = root_system(&cartan_type)?.dynkin_diagram();
    let index_set: Vec<String> = cartan_type
        .index_set()
        .iter()
        .map(ToString::to_string)
        .collect();

    println!("type:             {}", cartan_type.repr(false, options));
    println!("compact:          {}", cartan_type.repr(true, options));
    println!("latex:            {}", cartan_type.latex_name(options));
    println!("rank:             {}", cartan_type.rank());
    println!("index set:        {}", index_set.join(" "));
    println!("finite:           {}", cartan_type.is_finite());
    println!("affine:           {}", cartan_type.is_affine());
    println!("untwisted affine: {}", cartan_type.is_untwisted_affine());
    println!("simply laced:     {}", cartan_type.is_simply_laced());
    println!("classical:        {}", cartan_type.classical().repr(false, options));
    println!("dual:             {}", cartan_type.dual().repr(false, options));
    println!("cartan matrix:");
    for row in diagram.cartan_matrix() {
        let cells: Vec<String> = row.iter().map(|a| format!("{:>3}", a)).collect();
        println!("{}", cells.join(""));
    }
    Ok(())
}

fn parse_cartan_type(text: &str) -> anyhow::Result<CartanType> {
    text.parse::<CartanType>()
        .with_context(|| format!("Cannot parse Cartan type {:?}", text))
}

/// Build the label function for `--labels` or `--offset` and check it is injective.
fn label_fn(args: &LabelArgs, cartan_type: &CartanType) -> anyhow::Result<BoxedLabel> {
    let nodes = cartan_type.index_set();
    let first = nodes.first().map_or(0, |n| n.0);

    let label: BoxedLabel = match &args.labels {
        Some(labels) => {
            if let Some(missing) = nodes.get(labels.len()) {
                return Err(DynkinError::MissingLabel(*missing).into());
            }
            if labels.len() > nodes.len() {
                anyhow::bail!(
                    "{} has {} nodes but {} labels were given",
                    cartan_type,
                    nodes.len(),
                    labels.len()
                );
            }
            let labels: Vec<String> = labels.iter().map(|l| l.trim().to_string()).collect();
            Box::new(move |i: usize| {
                i.checked_sub(first)
                    .and_then(|k| labels.get(k))
                    .cloned()
                    .unwrap_or_default()
            })
        }
        None => {
            let offset = args.offset;
            Box::new(move |i: usize| (i as i64 + offset).to_string())
        }
    };

    validate_labels(&nodes, &*label)?;
    Ok(label)
}
