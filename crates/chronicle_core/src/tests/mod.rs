//! Scenario tests for the calendar engine
//!
//! - `wizard_flows` - full calendar and event flows through `Wizard`
//! - `properties` - generated checks for the resolver and builder

mod wizard_flows;
