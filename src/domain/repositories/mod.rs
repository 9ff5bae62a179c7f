// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod catalog_repository;
pub mod favorite_repository;
pub mod user_repository;
