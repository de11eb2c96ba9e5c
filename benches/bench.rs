use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crumbtrail::{Route, RouteTable};

fn routes() -> Vec<Route> {
    vec![
        Route::new("/dashboard", "Dashboard"),
        Route::with_parent("/properties", "Properties", "/dashboard"),
        Route::with_parent("/properties/new", "New Property", "/properties"),
        Route::with_parent("/properties/:propertyId", "Property", "/properties"),
        Route::with_parent(
            "/properties/:propertyId/edit",
            "Edit Property",
            "/properties/:propertyId",
        ),
        Route::with_parent(
            "/properties/:propertyId/units",
            "Units",
            "/properties/:propertyId",
        ),
        Route::with_parent(
            "/properties/:propertyId/units/:unitId",
            "Unit",
            "/properties/:propertyId/units",
        ),
        Route::with_parent(
            "/properties/:propertyId/units/:unitId/leases",
            "Leases",
            "/properties/:propertyId/units/:unitId",
        ),
        Route::with_parent(
            "/properties/:propertyId/units/:unitId/leases/:leaseId",
            "Lease",
            "/properties/:propertyId/units/:unitId/leases",
        ),
        Route::with_parent("/tenants", "Tenants", "/dashboard"),
        Route::with_parent("/tenants/:tenantId", "Tenant", "/tenants"),
        Route::with_parent("/payments", "Payments", "/dashboard"),
        Route::with_parent("/payments/:paymentId", "Payment", "/payments"),
        Route::with_parent("/maintenance", "Maintenance", "/dashboard"),
        Route::with_parent("/maintenance/:requestId", "Request", "/maintenance"),
        Route::with_parent(
            "/maintenance/:requestId/history",
            "History",
            "/maintenance/:requestId",
        ),
    ]
}

fn paths() -> Vec<&'static str> {
    vec![
        "/dashboard",
        "/properties",
        "/properties/12",
        "/properties/12/units",
        "/properties/12/units/3a",
        "/properties/12/units/3a/leases/88",
        "/tenants/451",
        "/payments/9021",
        "/maintenance/77/history",
        "/not/a/registered/route",
    ]
}

fn resolve_trails(c: &mut Criterion) {
    let table = RouteTable::new(routes()).unwrap();
    let paths = paths();

    c.bench_function("resolve", |b| {
        b.iter(|| {
            for path in black_box(&paths) {
                black_box(table.resolve(path));
            }
        });
    });

    c.bench_function("match only", |b| {
        b.iter(|| {
            for path in black_box(&paths) {
                black_box(table.at(path));
            }
        });
    });
}

fn build_table(c: &mut Criterion) {
    let routes = routes();
    c.bench_function("build table", |b| {
        b.iter(|| black_box(RouteTable::new(black_box(routes.clone())).unwrap()));
    });
}

criterion_group!(benches, resolve_trails, build_table);
criterion_main!(benches);
