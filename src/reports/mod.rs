use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use monrank::optimizer::runner::{RankedMonster, ScoredEntry};
use monrank::scorer::loader::MonsterRecord;
use monrank::scorer::{Projection, ScoredCandidate};

fn offsets_label(candidate: &ScoredCandidate) -> String {
    match candidate.offsets {
        Some((a, b)) => format!("{} + {}", a, b),
        None => "-".to_string(),
    }
}

pub fn print_ranking(ranked: &[RankedMonster], with_offsets: bool) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("#"),
        Cell::new("Monster ID").add_attribute(Attribute::Bold),
        Cell::new("Name-English").add_attribute(Attribute::Bold),
        Cell::new("Main"),
        Cell::new("Sub"),
        Cell::new("Score").fg(Color::Cyan),
    ];
    if with_offsets {
        header.push(Cell::new("Offsets").fg(Color::Green));
    }
    table.add_row(header);

    for i in [0, 1, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, m) in ranked.iter().enumerate() {
        let mut row = vec![
            Cell::new(rank + 1),
            Cell::new(m.id),
            Cell::new(&m.name).add_attribute(Attribute::Bold),
            Cell::new(&m.main),
            Cell::new(&m.sub),
            Cell::new(format!("{:.4}", m.candidate.score)).fg(Color::Cyan),
        ];
        if with_offsets {
            row.push(Cell::new(offsets_label(&m.candidate)).fg(Color::Green));
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_best_entry(monster: &MonsterRecord, best: &ScoredEntry) {
    println!("\n=== BEST ENTRY: {} ({}) ===", monster.name, monster.id);
    println!("Best Entry ID: {}", best.entry.entry_id);
    println!("Offsets: {} {}", best.entry.offset1, best.entry.offset2);
    println!("Score: {}", best.score);
}

fn projection_row(table: &mut Table, label: &str, p: &Projection) {
    table.add_row(vec![
        Cell::new(label).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}", p.weeks_available)),
        Cell::new(format!("{:.0}", p.heavy_cycles)),
        Cell::new(p.main_stat.to_string()),
        Cell::new(format!("{:.1}", p.projected_main)),
        Cell::new(format!("{:.1}", p.projected_skill)),
        Cell::new(format!("{:.1}", p.projected_speed)),
        Cell::new(format!("{:.1}", p.effective_guts_rate)),
        Cell::new(format!("{:.4}", p.score)).fg(Color::Cyan),
    ]);
}

pub fn print_search(
    monster: &MonsterRecord,
    base: &ScoredCandidate,
    best: &ScoredCandidate,
    top: &[ScoredCandidate],
) {
    println!("\n=== OFFSET SEARCH: {} ({}) ===", monster.name, monster.id);

    let mut breakdown = Table::new();
    breakdown
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    breakdown.add_row(vec![
        Cell::new(""),
        Cell::new("Weeks"),
        Cell::new("Cycles"),
        Cell::new("Main"),
        Cell::new("Main@End"),
        Cell::new("Ski@End"),
        Cell::new("Spd@End"),
        Cell::new("Guts"),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    if let Some(p) = &base.projection {
        projection_row(&mut breakdown, "Base", p);
    }
    if let Some(p) = &best.projection {
        projection_row(&mut breakdown, &format!("Best ({})", offsets_label(best)), p);
    }
    for i in 1..=8 {
        if let Some(col) = breakdown.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", breakdown);

    let mut pairs = Table::new();
    pairs.load_preset(ASCII_FULL);
    pairs.add_row(vec![
        Cell::new("#"),
        Cell::new("Offsets").fg(Color::Green),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Gain"),
    ]);
    for (rank, c) in top.iter().enumerate() {
        pairs.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(offsets_label(c)).fg(Color::Green),
            Cell::new(format!("{:.4}", c.score)).fg(Color::Cyan),
            Cell::new(format!("{:+.4}", c.score - base.score)),
        ]);
    }
    println!("{}", pairs);
}
