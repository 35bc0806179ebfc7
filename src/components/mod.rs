//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the panel chrome and cards while reading/writing the
//! `auth` and `designs` signals owned by the panel.

pub mod design_card;
pub mod design_grid;
pub mod my_designs_panel;
pub mod section_tab;
