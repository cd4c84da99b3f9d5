// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Common Modul for the track fitter
//!
//! Provides the data types that are shared between the geometry engine,
//! the file format adapter and the runtime modules.

pub mod position;
pub mod test_helper;
pub mod track_description;
pub mod track_point;

#[cfg(test)]
mod tests;
