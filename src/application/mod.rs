// SPDX-License-Identifier: MPL-2.0
//! Application layer: ports to external collaborators.

pub mod port;
