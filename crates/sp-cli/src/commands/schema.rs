use sp_core::schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `spl schema <type>`. Needs neither config nor database.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let name = args.type_name.replace('-', "_");
    let Some(schema) = registry.get(&name) else {
        anyhow::bail!(
            "unknown schema type '{}'; available: {}",
            args.type_name,
            registry.list().join(", ")
        );
    };
    output(schema, flags.format)
}
