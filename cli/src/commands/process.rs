use std::sync::Arc;

use libris_common::config::Config;
use libris_common::library::{BookRecord, LoanRecord};
use libris_core::notification::{ConsoleSink, NotificationSink};
use libris_core::wiring::ServiceConfig;

use crate::commands::ProcessArgs;
use crate::terminal::print;

pub fn process(args: ProcessArgs, cfg: &Config) -> anyhow::Result<()> {
    let book = Arc::new(BookRecord::new(&args.title, &args.author, &args.isbn)?);
    let loan = LoanRecord::new(book, &args.borrower, args.days)?;
    let sink: Arc<dyn NotificationSink> = Arc::new(ConsoleSink::new());

    if cfg.quiet == 0 {
        print::aligned_line("Loan", loan.to_string());
        print::aligned_line("Book", loan.book().to_string());
    }

    for policy in args.policy.policies() {
        let wiring = ServiceConfig::new()
            .with_policy(policy)
            .with_sink(Arc::clone(&sink));

        if args.full {
            let mut service = wiring.build_full_service()?;
            let cost = service.process_loan_fully(&loan);
            print::aligned_line("Cost", print::cost(cost));
            print::aligned_line("Statistics", service.statistics().to_string());
            print::aligned_line("State", service.to_string());
        } else {
            let service = wiring.build_loan_service()?;
            let cost = service.process_loan(&loan);
            print::aligned_line("Cost", print::cost(cost));
            if cfg.quiet == 0 {
                print::aligned_line("Policy", service.policy_info());
            }
        }
    }

    Ok(())
}
