//! Agent and arena settings read from `config.toml`.
//!
//! [`CentralConfig`] has one struct per TOML section:
//!
//! | Section      | Struct           | Used for                                   |
//! |--------------|------------------|--------------------------------------------|
//! | `[common]`   | [`CommonConfig`] | log level, base seed for agent generators  |
//! | `[playout]`  | [`PlayoutConfig`]| random-move sampling ceiling               |
//! | `[mcts]`     | [`MctsConfig`]   | clock fractions, rollout cap and threads   |
//! | `[maxn]`     | [`MaxNConfig`]   | MaxN depth                                 |
//! | `[arena]`    | [`ArenaConfig`]  | games, roster, clocks, ply limit, summary  |
//!
//! Missing keys take the values embedded from `config.defaults.toml`; the
//! same values are exposed as plain functions (e.g. [`depth_limit`]).
//!
//! A file is looked up through `THREECHESS_CONFIG`, then
//! [`CONFIG_SEARCH_PATHS`]. After parsing, `THREECHESS_<SECTION>_<KEY>`
//! variables replace individual values, for example
//! `THREECHESS_MAXN_DEPTH_LIMIT=3` or
//! `THREECHESS_ARENA_AGENTS=maxn,mcts-grudge,random` (comma list).

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
