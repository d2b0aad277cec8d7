use assert_cmd::Command;
use predicates::str::contains;

fn script(input: &str) -> Command {
    let mut cmd = Command::cargo_bin("balance_cli").unwrap();
    cmd.env("BALANCE_CLI_SCRIPT", "1").write_stdin(input.to_string());
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    script(
        "person add Jeff\n\
         account add Jeff JeffsAccount\n\
         income add Jeff JeffsAccount Salary 3000 1\n\
         income list Jeff JeffsAccount\n\
         exit\n",
    )
    .assert()
    .success()
    .stdout(contains("Added person `Jeff`."))
    .stdout(contains("Created account `JeffsAccount` for `Jeff`."))
    .stdout(contains("Salary  3000.00  1"));
}

#[test]
fn bills_need_their_category_first() {
    script(
        "person add Jeff\n\
         account add Jeff Current\n\
         category add Housing 255 0 0\n\
         bill add Jeff Current Rent 800 28 Housing\n\
         bill list Jeff Current\n\
         exit\n",
    )
    .assert()
    .success()
    .stdout(contains("Added category `Housing` (#ff0000)."))
    .stdout(contains("Rent  800.00  28"));
}

#[test]
fn unknown_category_is_reported_not_fatal() {
    script(
        "person add Jeff\n\
         account add Jeff Current\n\
         bill add Jeff Current Rent 800 28 Housing\n\
         person list\n\
         exit\n",
    )
    .assert()
    .success()
    .stdout(contains("No category named `Housing`."))
    .stdout(contains("Jeff"));
}

#[test]
fn unknown_command_suggests_the_closest_name() {
    script("persn add Jeff\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `persn`."))
        .stdout(contains("Suggestion: `person`?"));
}

#[test]
fn dump_prints_the_book_as_json() {
    script(
        "person add Jeff\n\
         account add Jeff JeffsAccount\n\
         dump\n\
         exit\n",
    )
    .assert()
    .success()
    .stdout(contains("\"name\": \"Jeff\""))
    .stdout(contains("\"name\": \"JeffsAccount\""));
}

#[test]
fn free_form_dates_pass_through_quoting() {
    script(
        "person add Jeff\n\
         account add Jeff Current\n\
         income add Jeff Current Overtime 120 \"As & When\"\n\
         income list Jeff Current\n\
         exit\n",
    )
    .assert()
    .success()
    .stdout(contains("Overtime  120.00  As & When"));
}

#[test]
fn removing_a_missing_person_is_reported() {
    script("person remove Ghost\nexit\n")
        .assert()
        .success()
        .stdout(contains("No person named `Ghost`."));
}
