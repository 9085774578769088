//! Command implementations.

mod update_badges;

pub use update_badges::{
    UpdateBadgesArgs,
    update_badges,
};
