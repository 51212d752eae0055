//! # Bag Contract
//!
//! The authoritative description of [`SchedulePreferenceAssignmentBag`]'s
//! wire shape. The client-side TypeScript declaration is generated from this
//! table, and the codec uses it to recognise known keys.
//!
//! [`SchedulePreferenceAssignmentBag`]: crate::SchedulePreferenceAssignmentBag

pub const TYPE_NAME: &str = "SchedulePreferenceAssignmentBag";

pub const TYPE_DOC: &str = "A bag that contains information about a schedule preference assignment for the group schedule toolbox block.";

const BANNER: &str = "\
//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by bag-codegen.
//     Changes to this file will be lost when the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------
";

const GUID_IMPORT: &str = "import { Guid } from \"@Obsidian/Types\";";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Guid,
    Text,
}

impl FieldKind {
    pub fn typescript_type(self) -> &'static str {
        match self {
            FieldKind::Guid => "Guid",
            FieldKind::Text => "string",
        }
    }
}

/// One optional, nullable field of the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Case-sensitive wire name.
    pub name: &'static str,
    pub kind: FieldKind,
    pub doc: &'static str,
}

pub static FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "groupMemberAssignmentGuid",
        kind: FieldKind::Guid,
        doc: "Gets or sets the group member assignment unique identifier.",
    },
    FieldSpec {
        name: "locationName",
        kind: FieldKind::Text,
        doc: "Gets or sets the location name.",
    },
    FieldSpec {
        name: "scheduleName",
        kind: FieldKind::Text,
        doc: "Gets or sets the schedule name.",
    },
];

/// Wire names in declaration order.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|field| field.name)
}

pub fn is_known_field(name: &str) -> bool {
    FIELDS.iter().any(|field| field.name == name)
}

/// Renders the client-side `.d.ts` declaration for the bag.
///
/// The output is deterministic so regenerated files only change when the
/// field table does.
pub fn typescript_declaration() -> String {
    let mut out = String::from(BANNER);
    out.push('\n');

    if FIELDS.iter().any(|field| field.kind == FieldKind::Guid) {
        out.push_str(GUID_IMPORT);
        out.push_str("\n\n");
    }

    out.push_str(&format!("/** {} */\n", TYPE_DOC));
    out.push_str(&format!("export type {} = {{\n", TYPE_NAME));

    for (index, field) in FIELDS.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("    /** {} */\n", field.doc));
        out.push_str(&format!(
            "    {}?: {} | null;\n",
            field.name,
            field.kind.typescript_type()
        ));
    }

    out.push_str("};\n");
    out
}
