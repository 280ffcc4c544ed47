//! # Strategy Generator
//!
//! Derives every strategy section from the answer set through independent
//! table lookups. Generation is pure: the same answers always produce the
//! same strategy.
//!
//! Some generators accept answers they do not consult yet (the target market
//! for channels, product stage and budget for tactics, business model for
//! metrics, product stage for phases). They stay in the signatures so callers
//! pass the full context and the unused inputs remain visible.

use crate::application::tables;
use crate::domain::error::{LookupMiss, StrategyError};
use crate::domain::types::{
    Answers, BusinessModel, Budget, Channel, IdealCustomerProfile, LookupPolicy, Phase,
    PrimaryGoal, ProductType, Strategy, TargetMarket, Timeline,
};
use crate::strings::logs;
use crate::strings::templates::{self, TemplateRenderer};

/// Builds the full strategy, falling back to table defaults on any miss.
pub fn generate(answers: &Answers) -> Strategy {
    Strategy {
        positioning: generate_positioning(
            &answers.product_type,
            &answers.differentiator,
            &answers.target_market,
        ),
        icp: generate_icp(&answers.business_model, &answers.target_market),
        channels: generate_channels(
            &answers.business_model,
            &answers.target_market,
            &answers.budget,
        ),
        tactics: generate_tactics(&answers.product_stage, &answers.primary_goal, &answers.budget),
        metrics: generate_metrics(&answers.primary_goal, &answers.business_model),
        phases: generate_phases(&answers.timeline, &answers.product_stage),
    }
}

/// Like [`generate`], but reports lookup misses first. Under
/// [`LookupPolicy::Strict`] any miss is an error; otherwise each miss is
/// logged and the defaults are used.
pub fn generate_checked(answers: &Answers, policy: LookupPolicy) -> Result<Strategy, StrategyError> {
    let misses = audit(answers);
    if !misses.is_empty() {
        if policy == LookupPolicy::Strict {
            return Err(StrategyError::UnmatchedLookup { misses });
        }
        for miss in &misses {
            tracing::warn!("{}", logs::lookup_fallback(miss));
        }
    }

    let strategy = generate(answers);
    tracing::info!("{}", logs::strategy_generated(&answers.product_name));
    Ok(strategy)
}

/// Every lookup that would fall back to its default for these answers.
pub fn audit(answers: &Answers) -> Vec<LookupMiss> {
    let mut misses = Vec::new();

    if ProductType::from_key(&answers.product_type).is_none() {
        misses.push(LookupMiss::ProductType {
            value: answers.product_type.clone(),
        });
    }
    if customer_profile(&answers.business_model, &answers.target_market).is_none() {
        misses.push(LookupMiss::CustomerProfile {
            key: composite_key(&answers.business_model, &answers.target_market),
        });
    }
    if channel_key(&answers.business_model, &answers.budget).is_none() {
        misses.push(LookupMiss::Channels {
            key: composite_key(&answers.business_model, &answers.budget),
        });
    }
    if PrimaryGoal::from_key(&answers.primary_goal).is_none() {
        misses.push(LookupMiss::Tactics {
            goal: answers.primary_goal.clone(),
        });
        misses.push(LookupMiss::Metrics {
            goal: answers.primary_goal.clone(),
        });
    }
    if Timeline::from_key(&answers.timeline).is_none() {
        misses.push(LookupMiss::Timeline {
            value: answers.timeline.clone(),
        });
    }

    misses
}

pub fn generate_positioning(product_type: &str, differentiator: &str, target_market: &str) -> String {
    let noun = ProductType::from_key(product_type)
        .map(tables::product_noun)
        .unwrap_or(tables::DEFAULT_NOUN);

    TemplateRenderer::new(templates::POSITIONING_TEMPLATE)
        .set("{{TARGET_MARKET}}", target_market)
        .set("{{DIFFERENTIATOR}}", differentiator)
        .set("{{NOUN}}", noun)
        .render()
}

pub fn generate_icp(business_model: &str, target_market: &str) -> IdealCustomerProfile {
    customer_profile(business_model, target_market)
        .unwrap_or(tables::DEFAULT_ICP)
        .into()
}

/// `_target_market` is accepted but not consulted.
pub fn generate_channels(business_model: &str, _target_market: &str, budget: &str) -> Vec<Channel> {
    channel_key(business_model, budget)
        .map(|(model, budget)| tables::channel_rows(model, budget))
        .unwrap_or(tables::DEFAULT_CHANNELS)
        .iter()
        .map(Channel::from)
        .collect()
}

/// Only `primary_goal` is consulted.
pub fn generate_tactics(_product_stage: &str, primary_goal: &str, _budget: &str) -> Vec<String> {
    let goal = PrimaryGoal::from_key(primary_goal).unwrap_or(tables::DEFAULT_GOAL);
    to_owned(tables::tactics(goal))
}

/// Only `primary_goal` is consulted.
pub fn generate_metrics(primary_goal: &str, _business_model: &str) -> Vec<String> {
    let goal = PrimaryGoal::from_key(primary_goal).unwrap_or(tables::DEFAULT_GOAL);
    to_owned(tables::metrics(goal))
}

/// Only `timeline` is consulted; anything but `short` or `medium` gets the
/// quarterly plan.
pub fn generate_phases(timeline: &str, _product_stage: &str) -> Vec<Phase> {
    tables::phases(Timeline::from_key(timeline))
        .iter()
        .map(Phase::from)
        .collect()
}

/// Composite keys are matched case-insensitively on both halves. A pair of
/// known values can still have no row (`b2b-mass`).
fn customer_profile(business_model: &str, target_market: &str) -> Option<&'static tables::IcpRow> {
    let model = BusinessModel::from_key(&business_model.to_lowercase())?;
    let market = TargetMarket::from_key(&target_market.to_lowercase())?;
    tables::icp_row(model, market)
}

fn channel_key(business_model: &str, budget: &str) -> Option<(BusinessModel, Budget)> {
    let model = BusinessModel::from_key(&business_model.to_lowercase())?;
    let budget = Budget::from_key(&budget.to_lowercase())?;
    Some((model, budget))
}

fn composite_key(first: &str, second: &str) -> String {
    format!("{first}-{second}").to_lowercase()
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
