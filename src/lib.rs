// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含收藏与个人资料用例以及请求/响应DTO
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、访问策略和仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供数据库实体、仓库实现和指标导出
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和中间件
pub mod presentation;

/// 工具模块
///
/// 提供日志初始化和通用错误类型
pub mod utils;

/// 工作器模块
///
/// 后台收藏计数校正
pub mod workers;
