// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Builtin binding units, one per SDK subsystem.
//!
//! `builtin_catalog` assembles the roster the module composer registers at
//! import time. Catalog insertion order is the tiebreak order the scheduler
//! uses, not the execution order; requirements decide what runs first.

mod asset_manager;
mod bootloader;
mod calibration;
mod common;
mod data_queue;
mod datatypes;
mod device;
mod link;
mod log;
mod model;
mod node;
mod pipeline;
mod ros;
mod version;

pub use asset_manager::AssetManagerUnit;
pub use bootloader::BootloaderUnit;
pub use calibration::CalibrationUnit;
pub use common::CommonUnit;
pub use data_queue::DataQueueUnit;
pub use datatypes::DatatypesUnit;
pub use device::DeviceUnit;
pub use link::LinkUnit;
pub use log::LogUnit;
pub use model::ModelUnit;
pub use node::NodeUnit;
pub use pipeline::PipelineUnit;
pub use ros::RosUnit;
pub use version::VersionUnit;

use crate::compose::UnitCatalog;
use crate::config::UnitToggles;
use std::sync::Arc;

/// Assemble the builtin unit roster.
///
/// The ROS glue only joins when toggled on; everything else always ships.
pub fn builtin_catalog(toggles: &UnitToggles) -> UnitCatalog {
    let mut catalog = UnitCatalog::new();
    catalog.add(Arc::new(CommonUnit));
    catalog.add(Arc::new(DatatypesUnit));
    catalog.add(Arc::new(LogUnit));
    catalog.add(Arc::new(VersionUnit));
    catalog.add(Arc::new(ModelUnit));
    catalog.add(Arc::new(DataQueueUnit));
    catalog.add(Arc::new(NodeUnit));
    catalog.add(Arc::new(AssetManagerUnit));
    catalog.add(Arc::new(PipelineUnit));
    catalog.add(Arc::new(LinkUnit));
    catalog.add(Arc::new(DeviceUnit));
    catalog.add(Arc::new(BootloaderUnit));
    catalog.add(Arc::new(CalibrationUnit));
    if toggles.ros {
        catalog.add(Arc::new(RosUnit));
    }
    catalog
}
