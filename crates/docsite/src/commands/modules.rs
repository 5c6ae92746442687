//! `docsite modules` command implementation.

use docsite_snippet::ModuleId;

use crate::output::Output;

/// Print every module as `group:artifact<TAB>description`.
pub(crate) fn execute(output: &Output) {
    for module in ModuleId::ALL {
        output.result(&format!(
            "{}:{}\t{}",
            module.group_id(),
            module.as_str(),
            module.description()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lists_every_module() {
        let output = Output::captured();
        execute(&output);

        assert_eq!(
            output.results(),
            vec![
                "org.business4s:chatops4s-core\tCore functionality".to_owned(),
                "org.business4s:chatops4s-slack\tSlack integration".to_owned(),
            ]
        );
    }
}
