// SPDX-License-Identifier: MIT

pub mod sequences;
