// SPDX-License-Identifier: MPL-2.0
//! Localization support backed by Fluent.

pub mod fluent;
