mod utils;

use soroban_sdk::testutils::Ledger;
use stikman_dashboard::{ProposalStatus, Tab};
use stikman_fixtures::VOTING_PERIOD_SECONDS;

use utils::TestEnvironment;

#[test]
fn test_member_runs_a_proposal_to_execution() {
    let t = TestEnvironment::new();
    t.mint_to(&t.sandbox.deployer);
    let mut dashboard = t.dashboard(t.wallet());
    dashboard.start();
    assert_eq!(dashboard.state().nft_balance, 1);

    dashboard.select_tab(Tab::CreateProposal);
    dashboard.set_nft_token_id_input("5");
    assert_eq!(dashboard.create_proposal(), Some(0));
    assert_eq!(dashboard.state().num_proposals, 1);

    dashboard.select_tab(Tab::ViewProposals);
    let now = t.sandbox.env.ledger().timestamp();
    let proposal = &dashboard.state().proposals[0];
    assert_eq!(proposal.nft_token_id, 5);
    assert_eq!(proposal.deadline, now + VOTING_PERIOD_SECONDS);
    assert_eq!(proposal.status(now), ProposalStatus::Voting);

    assert!(dashboard.vote_on_proposal(0, "YAY"));
    assert_eq!(dashboard.state().proposals[0].yay_votes, 1);

    t.sandbox.advance_time(VOTING_PERIOD_SECONDS + 1);
    assert!(dashboard.render().to_string().contains("[Execute Proposal (YAY)]"));

    assert!(dashboard.execute_proposal(0));
    assert!(dashboard.state().proposals[0].executed);
    assert!(dashboard.render().to_string().contains("Proposal Executed"));
    assert!(dashboard.alerts().messages().is_empty());
}

#[test]
fn test_header_shows_seeded_treasury() {
    let t = TestEnvironment::new();
    let mut dashboard = t.dashboard(t.wallet());

    dashboard.start();

    assert_eq!(dashboard.state().treasury_balance, 10_000_000);
    let page = dashboard.render().to_string();
    assert!(page.contains("Treasury Balance: 1.0 XLM"));
    assert!(page.contains("Total Number of Proposals: 0"));
}

#[test]
fn test_wrong_network_is_alerted() {
    let t = TestEnvironment::new();
    t.sandbox
        .env
        .ledger()
        .with_mut(|ledger| ledger.network_id = [1u8; 32]);
    let mut dashboard = t.dashboard(t.wallet());

    dashboard.start();

    assert!(!dashboard.state().wallet_connected);
    assert_eq!(
        dashboard.alerts().messages(),
        vec!["Please switch to the Stellar testnet!".to_string()]
    );
}

#[test]
fn test_non_member_sees_contract_message() {
    let t = TestEnvironment::new();
    let mut dashboard = t.dashboard(t.wallet());
    dashboard.start();

    dashboard.set_nft_token_id_input("5");
    assert_eq!(dashboard.create_proposal(), None);

    assert!(!dashboard.state().loading);
    assert_eq!(
        dashboard.alerts().messages(),
        vec!["NOT_A_DAO_MEMBER".to_string()]
    );
}

#[test]
fn test_proposal_for_sold_nft_is_refused() {
    let t = TestEnvironment::new();
    t.mint_to(&t.sandbox.deployer);
    t.sell(5);
    let mut dashboard = t.dashboard(t.wallet());
    dashboard.start();

    dashboard.set_nft_token_id_input("5");
    assert_eq!(dashboard.create_proposal(), None);

    assert_eq!(
        dashboard.alerts().messages(),
        vec!["NFT_NOT_FOR_SALE".to_string()]
    );
}

#[test]
fn test_voting_after_deadline_is_refused() {
    let t = TestEnvironment::new();
    t.mint_to(&t.sandbox.deployer);
    let mut dashboard = t.dashboard(t.wallet());
    dashboard.start();
    dashboard.set_nft_token_id_input("2");
    dashboard.create_proposal();

    t.sandbox.advance_time(VOTING_PERIOD_SECONDS);

    assert!(!dashboard.vote_on_proposal(0, "NAY"));
    assert_eq!(
        dashboard.alerts().messages(),
        vec!["DEADLINE_EXCEEDED".to_string()]
    );
}

#[test]
fn test_refusing_wallet_leaves_dashboard_disconnected() {
    let t = TestEnvironment::new();
    let mut dashboard = t.dashboard(t.wallet().refusing());

    dashboard.start();

    assert!(!dashboard.state().wallet_connected);
    assert!(!dashboard.session().is_connected());
    assert_eq!(dashboard.state().treasury_balance, 0);
}
