//! Soil variable catalog.
//!
//! Defines the fixed set of HWSD soil variables: what each raster layer
//! measures, its unit, caveats, storage type and, for coded layers, the
//! meaning of each code. Variable names double as asset filename stems.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use stac_types::RasterDataType;

use crate::error::{HwsdError, Result};

/// Description of one soil variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDescriptor {
    /// Short identifier (e.g., "T_SAND"); also the asset filename stem
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Physical unit or coding scheme
    pub unit: &'static str,
    /// Free-text caveat, if the source provides one
    pub notes: Option<&'static str>,
    /// Raster storage type
    pub data_type: RasterDataType,
    /// Ordered (code, label) pairs for coded variables
    pub class_labels: Option<&'static [(i64, &'static str)]>,
}

impl VariableDescriptor {
    /// Whether the variable holds class codes rather than measurements.
    pub fn is_categorical(&self) -> bool {
        self.class_labels.is_some()
    }
}

const AWC_CLASS_LABELS: &[(i64, &str)] = &[
    (1, "150 mm"),
    (2, "125 mm"),
    (3, "100 mm"),
    (4, "75 mm"),
    (5, "50 mm"),
    (6, "15 mm"),
    (7, "0 mm"),
];

const ISSOIL_LABELS: &[(i64, &str)] = &[(0, "non-soil"), (1, "soil")];

const ROOTS_LABELS: &[(i64, &str)] = &[
    (0, "no information"),
    (1, "no obstacles to roots between 0 and 80 cm depth"),
    (2, "obstacles to roots between 60 and 80 cm depth"),
    (3, "obstacles to roots between 40 and 60 cm depth"),
    (4, "obstacles to roots between 20 and 40 cm depth"),
    (5, "obstacles to roots between 0 and 80 cm depth"),
    (6, "obstacles to roots between 0 and 20 cm depth"),
];

const fn measured(
    name: &'static str,
    description: &'static str,
    unit: &'static str,
    notes: Option<&'static str>,
) -> VariableDescriptor {
    VariableDescriptor {
        name,
        description,
        unit,
        notes,
        data_type: RasterDataType::Float64,
        class_labels: None,
    }
}

/// All variables, in catalog order.
static VARIABLES: &[VariableDescriptor] = &[
    VariableDescriptor {
        name: "AWC_CLASS",
        description: "Available water storage capacity",
        unit: "Coded values 1 through 7",
        notes: Some(
            "1 = 150 mm water per m of the soil unit, 2 = 125 mm, 3 = 100 mm, 4 = 75 mm, \
             5 = 50 mm, 6 = 15 mm, 7 = 0 mm.",
        ),
        data_type: RasterDataType::Int16,
        class_labels: Some(AWC_CLASS_LABELS),
    },
    VariableDescriptor {
        name: "ISSOIL",
        description: "Soil or non-soil units",
        unit: "0 or 1",
        notes: Some("ISSOIL indicates whether the soil mapping unit is a soil (1) or non-soil (0)"),
        data_type: RasterDataType::Int16,
        class_labels: Some(ISSOIL_LABELS),
    },
    VariableDescriptor {
        name: "MU_GLOBAL",
        description: "HWSD global mapping unit identifier",
        unit: "numerical ID",
        notes: Some(
            "MU_GLOBAL provides a link from the grid cell to the other attributes. The HWSD v1.2 \
             attribute lookup table is available from the HWSD project (FAO 2012)",
        ),
        data_type: RasterDataType::Int32,
        class_labels: None,
    },
    VariableDescriptor {
        name: "REF_DEPTH",
        description: "Reference soil depth",
        unit: "cm",
        notes: Some(
            "Reference soil depth of all soil units are set at 100 cm, except for Rendzinas and \
             Rankers of FAO-74 and Leptosols of FAO-90, where the reference soil depth is set at \
             30 cm, and for Lithosols of FAO-74 and Lithic Leptosols of FAO-90, where it is set \
             at 10 cm.",
        ),
        data_type: RasterDataType::Int16,
        class_labels: None,
    },
    VariableDescriptor {
        name: "ROOTS",
        description: "Depth of obstacles to roots",
        unit: "Coded values 0 through 6",
        notes: Some(
            "0 = no information, 1 = no obstacles to roots between 0 and 80 cm depth, \
             2 = obstacles to roots between 60 and 80 cm depth, 3 = obstacles between 40 and \
             60 cm, 4 = 20 and 40 cm, 5 = 0 and 80 cm, 6 = 0 and 20 cm.",
        ),
        data_type: RasterDataType::Int16,
        class_labels: Some(ROOTS_LABELS),
    },
    measured("T_BULK_DEN", "Topsoil bulk density", "kg dm-3", None),
    measured("S_BULK_DEN", "Subsoil bulk density", "kg dm-3", None),
    measured(
        "T_REF_BULK",
        "Topsoil reference bulk density",
        "kg dm-3",
        Some(
            "Reference bulk density values are calculated from equations developed by Saxton et \
             al. (1986) that relate to the texture of the soil only. These estimates, although \
             generally reliable, overestimate the bulk density in soils that have a high porosity \
             (Andosols) or that are high in organic matter content (Histosols). The calculation \
             procedures for reference bulk density can be found in Saxton et al (1986)",
        ),
    ),
    measured("S_REF_BULK", "Subsoil reference bulk density", "kg dm-3", None),
    measured(
        "T_CEC_CLAY",
        "Cation exchange capacity of the clay fraction in the topsoil",
        "cmol per kg",
        None,
    ),
    measured(
        "S_CEC_CLAY",
        "Cation exchange capacity of the clay fraction in the subsoil",
        "cmol per kg",
        None,
    ),
    measured("T_CLAY", "Topsoil clay fraction", "% weight", None),
    measured("S_CLAY", "Subsoil clay fraction", "% weight", None),
    measured("T_GRAVEL", "Topsoil gravel content", "% volume", None),
    measured("S_GRAVEL", "Subsoil gravel content", "% volume", None),
    measured("T_SAND", "Topsoil sand fraction", "% weight", None),
    measured("S_SAND", "Subsoil sand fraction", "% weight", None),
    measured("T_SILT", "Topsoil silt fraction", "% weight", None),
    measured("S_SILT", "Subsoil silt fraction", "% weight", None),
    measured("T_PH_H20", "Topsoil pH (in H2O)", "-log(H+)", None),
    measured("S_PH_H20", "Subsoil pH (in water)", "-log(H+)", None),
    measured(
        "T_C",
        "Topsoil carbon content",
        "kg C m-2",
        Some(
            "Topsoil and subsoil carbon content (T_C and S_C) are based on the carbon content of \
             the dominant soil type in each regridded cell rather than a weighted average.",
        ),
    ),
    measured("S_C", "Dominant soil type subsoil carbon content", "kg C m-2", None),
    measured("T_OC", "Topsoil organic carbon", "% weight", None),
    measured("S_OC", "Subsoil organic carbon", "% weight", None),
    measured(
        "AWT_S_SOC",
        "Area weighted subsoil carbon content",
        "kg C m-2",
        Some("AWT_S_SOC = (sum(SEQ(SHARE * S_OC)) * 7 * S_BULK_DENSITY)"),
    ),
    measured(
        "AWT_T_SOC",
        "Area weighted topsoil carbon content",
        "kg C m-2",
        Some("AWT_T_SOC = (sum(SEQ(SHARE * T_OC)) * 3 * T_BULK_DENSITY)"),
    ),
];

static INDEX: Lazy<HashMap<&'static str, &'static VariableDescriptor>> =
    Lazy::new(|| VARIABLES.iter().map(|v| (v.name, v)).collect());

/// Look up a variable by exact name.
pub fn lookup(name: &str) -> Result<&'static VariableDescriptor> {
    INDEX
        .get(name)
        .copied()
        .ok_or_else(|| HwsdError::UnknownVariable(name.to_string()))
}

/// Whether `name` is a registered variable.
pub fn contains(name: &str) -> bool {
    INDEX.contains_key(name)
}

/// Variable names in catalog order.
pub fn all_names() -> Vec<&'static str> {
    VARIABLES.iter().map(|v| v.name).collect()
}

/// All variables in catalog order.
pub fn iter() -> impl Iterator<Item = &'static VariableDescriptor> {
    VARIABLES.iter()
}

/// Number of registered variables.
pub fn len() -> usize {
    VARIABLES.len()
}
