//! Built-in catalog
//!
//! The static set of items this registry ships with, built once on first
//! access.

use once_cell::sync::Lazy;

use super::{Registry, RegistryItem, RegistryItemFile, RegistryItemType};

/// The catalog of items bundled with this crate.
pub fn builtin() -> &'static Registry {
    &BUILTIN
}

static BUILTIN: Lazy<Registry> = Lazy::new(|| Registry {
    name: "3D Registry".to_string(),
    homepage: Some("https://3dinformatica.github.io/3D-registry/".to_string()),
    items: vec![
        single_file_item(
            "icon-boolean",
            RegistryItemType::Ui,
            "Icon Boolean",
            "A boolean icon component that displays a check or cross icon based on a boolean \
             value. Supports different sizes, variants, and fallback states for null/undefined \
             values.",
            &["lucide-react", "class-variance-authority"],
            "registry/ui/icon-boolean/icon-boolean.tsx",
            "components/area/ui/icon-boolean.tsx",
        ),
        single_file_item(
            "switch-boolean",
            RegistryItemType::Ui,
            "Switch Boolean",
            "A boolean switch component that displays a switch based on a boolean value. \
             Supports different sizes, variants, and fallback states for null/undefined values.",
            &["lucide-react", "class-variance-authority"],
            "registry/ui/switch-boolean/switch-boolean.tsx",
            "components/area/ui/switch-boolean.tsx",
        ),
        single_file_item(
            "sheet",
            RegistryItemType::Block,
            "Sheet",
            "A side sheet block for displaying contextual detail content over the current page.",
            &[],
            "registry/block/sheet/sheet.tsx",
            "components/area/block/sheet.tsx",
        ),
        single_file_item(
            "navbar",
            RegistryItemType::Block,
            "Navbar",
            "A top navigation bar block with links to the registry sections.",
            &[],
            "registry/block/navbar/navbar.tsx",
            "components/area/block/navbar.tsx",
        ),
        single_file_item(
            "sidebar",
            RegistryItemType::Block,
            "Sidebar",
            "A sidebar block listing catalog entries with selection state.",
            &[],
            "registry/block/sidebar/sidebar.tsx",
            "components/area/block/sidebar.tsx",
        ),
        single_file_item(
            "combobox",
            RegistryItemType::Block,
            "Combobox",
            "A combobox block for picking one entry from a searchable list.",
            &[],
            "registry/block/combobox/combobox.tsx",
            "components/area/block/combobox.tsx",
        ),
        single_file_item(
            "use-intersection-observer",
            RegistryItemType::Hook,
            "Use Intersection Observer",
            "A hook that tracks which page section is currently visible and scrolls to a \
             section on demand. Useful for scroll-spy navigation.",
            &[],
            "registry/hooks/use-intersection-observer/use-intersection-observer.ts",
            "lib/hooks/use-intersection-observer.ts",
        ),
        single_file_item(
            "persistable-entity",
            RegistryItemType::Lib,
            "Persistable Entity",
            "A schema for a persistable entity. Includes id, disabledAt, createdAt, and \
             updatedAt fields. Useful for creating entities that can be persisted to a \
             database.",
            &["zod"],
            "registry/lib/utils/persistable-entity/persistable-entity.ts",
            "lib/utils/persistable-entity.ts",
        ),
        single_file_item(
            "util-date-formatters",
            RegistryItemType::Lib,
            "Date Formatters Utility",
            "A utility functions to format dates in various formats. Supports multiple date \
             formats including ISO, European, US, and readable formats with month names.",
            &[],
            "registry/lib/utils/util-date-formatters/util-date-formatters.ts",
            "lib/utils/util-date-formatters.ts",
        ),
        single_file_item(
            "util-categorize-schema-fields",
            RegistryItemType::Lib,
            "Schema Fields Utility",
            "A utility functions to categorize schema fields by their data type, returning an \
             object with the fields grouped by type and returning the default values for the \
             fields. Useful for dynamic form generation and schema analysis.",
            &["zod"],
            "registry/lib/utils/util-categorize-schema-fields/util-categorize-schema-fields.ts",
            "lib/utils/util-categorize-schema-fields.ts",
        ),
    ],
});

fn single_file_item(
    name: &str,
    item_type: RegistryItemType,
    title: &str,
    description: &str,
    dependencies: &[&str],
    path: &str,
    target: &str,
) -> RegistryItem {
    RegistryItem {
        name: name.to_string(),
        item_type,
        title: title.to_string(),
        description: description.to_string(),
        dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        registry_dependencies: Vec::new(),
        files: vec![RegistryItemFile {
            file_type: item_type,
            path: path.to_string(),
            target: Some(target.to_string()),
        }],
    }
}
