//! Company Cost Tree
//!
//! Builds a company hierarchy from a flat JSON list of companies and
//! rolls travel expenses up to every ancestor of the company that owns them.
//!
//! ## Getting Started
//!
//! ```bash
//! company-tree build --companies companies.json --travels travels.json --echo
//! ```
//!
//! The library can be used directly as well:
//!
//! ```
//! use company_cost_tree::aggregator::apply_all;
//! use company_cost_tree::hierarchy::build;
//! use company_cost_tree::parser::{decode_companies, decode_travels};
//!
//! let companies = decode_companies(br#"[
//!     {"id": "1", "name": "A", "parentId": ""},
//!     {"id": "2", "name": "B", "parentId": "1"}
//! ]"#).unwrap();
//! let travels = decode_travels(br#"[{"id": "t1", "price": 100, "companyId": "2"}]"#).unwrap();
//!
//! let mut tree = build(&companies).unwrap();
//! apply_all(&mut tree, &travels);
//!
//! assert_eq!(tree.root_node().cost, 100.0);
//! ```

pub mod aggregator;
pub mod commands;
pub mod hierarchy;
pub mod output;
pub mod parser;
pub mod source;
pub mod utils;
