//!
//! The client-side script of the HTML report.
//!

/// Chart.js bundle.
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4";

/// Chart.js time axis adapter.
pub const DATE_ADAPTER_URL: &str =
    "https://cdn.jsdelivr.net/npm/chartjs-adapter-date-fns@3/dist/chartjs-adapter-date-fns.bundle.min.js";

///
/// Draws the charts from the embedded report data and wires the metric headers.
///
/// Expects a `report-data` JSON script element with the serialized report.
///
pub const SCRIPT: &str = r#"
(function () {
    const report = JSON.parse(document.getElementById('report-data').textContent);
    const benchmarks = {};
    report.benchmarks.forEach((benchmark) => { benchmarks[benchmark.name] = benchmark; });
    const metrics = ['avg', 'min', 'max', 'median', 'p90', 'p95', 'p99'];
    const charts = {};

    function datasets(charts, metric) {
        const chart = charts[metric];
        return chart ? chart.datasets : [];
    }

    function yAxis() {
        return { beginAtZero: true, title: { display: true, text: 'Duration (ms)' } };
    }

    document.querySelectorAll('.chart').forEach((canvas) => {
        const benchmark = benchmarks[canvas.getAttribute('data-benchmark')];
        if (!benchmark) return;
        charts[canvas.id] = new Chart(canvas, {
            type: 'line',
            data: { datasets: datasets(benchmark.size_charts, report.metric) },
            options: {
                animation: { duration: 100 },
                responsive: true,
                scales: {
                    x: { type: 'linear', title: { display: true, text: 'Size' } },
                    y: yAxis(),
                },
            },
        });
    });

    document.querySelectorAll('.historical-chart').forEach((canvas) => {
        const benchmark = benchmarks[canvas.getAttribute('data-benchmark')];
        if (!benchmark) return;
        charts[canvas.id] = new Chart(canvas, {
            type: 'line',
            data: { datasets: datasets(benchmark.historical_charts, report.metric) },
            options: {
                animation: { duration: 100 },
                responsive: true,
                scales: {
                    x: {
                        type: 'time',
                        title: { display: true, text: 'Run Timestamp' },
                        time: { unit: 'day', displayFormats: { day: 'MMM dd' } },
                    },
                    y: yAxis(),
                },
            },
        });
    });

    document.querySelectorAll('.benchmark-table').forEach((table) => {
        table.querySelectorAll('th[data-metric]').forEach((th) => {
            th.addEventListener('click', () => {
                const metric = th.getAttribute('data-metric');
                if (!metrics.includes(metric)) return;
                const name = table.getAttribute('data-benchmark');
                const benchmark = benchmarks[name];
                if (!benchmark) return;

                document.querySelectorAll('.benchmark-table').forEach((other) => {
                    if (other.getAttribute('data-benchmark') !== name) return;
                    metrics.forEach((m) => other.classList.remove('selected-metric-' + m));
                    other.classList.add('selected-metric-' + metric);
                });

                const id = name.replace(/\s+/g, '-');
                const chart = charts['chart-' + id];
                if (chart) {
                    chart.data.datasets = datasets(benchmark.size_charts, metric);
                    chart.update();
                }
                const historical = charts['historical-chart-' + id];
                if (historical) {
                    historical.data.datasets = datasets(benchmark.historical_charts, metric);
                    historical.update();
                }
            });
        });
    });
})();
"#;
