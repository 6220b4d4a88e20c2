use model_compare::stats::keys;
use model_compare::{
    Analyzer, ComparisonExecutor, ConsoleReporter, MetricValue, MockClassifierRunner, ModelArch,
    PROCESSING_ORDER,
};
use model_compare::report::ResultsTable;

fn classifier_report(arch: &str, pct_match: f64, runtime: &str) -> String {
    format!(
        "\
Command Line Arguments:
     dir = uploaded_images/
    arch = {arch}
 dogfile = dognames.txt

*** Results Summary for CNN Model Architecture {upper} ***
N Images            :  4
N Dog Images        :  2
N Not-Dog Images    :  2

pct Correct Dogs    : 100.0%
pct Correct Breed   : 50.0%
pct Correct Notdogs : 100.0%
pct Match           : {pct_match:.1}%

INCORRECT Dog Breed Assignment:
Real:      beagle   Classifier: walker hound, english foxhound

** Total Elapsed Runtime: {runtime}
",
        arch = arch,
        upper = arch.to_uppercase(),
        pct_match = pct_match,
        runtime = runtime,
    )
}

#[tokio::test]
async fn test_three_successful_runs_recommend_best_match() {
    let runner = MockClassifierRunner::new()
        .with_output(ModelArch::Vgg, classifier_report("vgg", 80.0, "0:0:35"))
        .with_output(ModelArch::Alexnet, classifier_report("alexnet", 90.0, "0:0:4"))
        .with_output(ModelArch::Resnet, classifier_report("resnet", 93.3, "0:0:6"));

    let results = ComparisonExecutor::new(runner)
        .execute_all(&PROCESSING_ORDER)
        .await;
    assert_eq!(results.succeeded(), 3);

    let resnet = results.get(ModelArch::Resnet).unwrap();
    assert_eq!(resnet.get(keys::N_IMAGES), Some(&MetricValue::Count(4)));
    assert_eq!(resnet.get(keys::PCT_MATCH), Some(&MetricValue::Percent(93.3)));
    assert_eq!(resnet.runtime(), Some("0:0:6"));

    let console = ConsoleReporter::new().render(&results);
    let rows: Vec<Vec<&str>> = console
        .lines()
        .filter(|line| ["VGG", "ALEXNET", "RESNET"].iter().any(|m| line.starts_with(m)))
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["VGG", "100.0%", "50.0%", "100.0%", "80.0%"],
            vec!["ALEXNET", "100.0%", "50.0%", "100.0%", "90.0%"],
            vec!["RESNET", "100.0%", "50.0%", "100.0%", "93.3%"],
        ]
    );

    let analysis = Analyzer::analyze(&results);
    assert_eq!(analysis.recommended(), Some(ModelArch::Resnet));
    assert!(analysis.render().contains("RECOMMENDED MODEL: RESNET"));

    let table = ResultsTable::build(&results).unwrap();
    assert_eq!(table.rows[0][0], "ResNet");
    assert_eq!(table.rows[0][4], "93.3%");
    assert_eq!(table.rows[2][5], "0:0:35");
}

#[tokio::test]
async fn test_failed_run_degrades_to_error_row() {
    let runner = MockClassifierRunner::new()
        .with_output(ModelArch::Vgg, classifier_report("vgg", 80.0, "0:0:35"))
        .with_failure(ModelArch::Alexnet)
        .with_output(ModelArch::Resnet, classifier_report("resnet", 70.0, "0:0:6"));

    let results = ComparisonExecutor::new(runner)
        .execute_all(&PROCESSING_ORDER)
        .await;

    let console = ConsoleReporter::new().render(&results);
    let alexnet: Vec<&str> = console
        .lines()
        .find(|line| line.starts_with("ALEXNET"))
        .unwrap()
        .split_whitespace()
        .collect();
    assert_eq!(alexnet, vec!["ALEXNET", "ERROR", "ERROR", "ERROR", "ERROR"]);

    assert_eq!(Analyzer::analyze(&results).recommended(), Some(ModelArch::Vgg));

    let table = ResultsTable::build(&results).unwrap();
    assert_eq!(table.rows[1], vec!["AlexNet", "ERROR", "ERROR", "ERROR", "ERROR", "ERROR"]);
}
