//! The catalog of sample labels handed out to generated datasets.
//!
//! Every label has two words so that charts get exercised with labels that
//! contain whitespace.

use rand::seq::SliceRandom;
use rand::Rng;

pub const LABEL_POOL_SIZE: usize = 200;

/// Latin style names, distinct from one another
pub static LABEL_POOL: [&str; LABEL_POOL_SIZE] = [
    "Demaenetus Cassius", "Pseudolus Opis", "Franciscus Longinus", "Peniculus Tiberinus",
    "Stalagmus Sisenna", "Adulescens Ripanus", "Philoxenus Terenteius", "Cario Britannicus",
    "Philolaches Seneca", "Hegio Gaius", "Bruttia Constans", "Cloelia Tranio",
    "Caecia Volturcius", "Vassenia Rutilius", "Cosconia Camerarius", "Duronia Abercius",
    "Stertinia Sellic", "Antistia Lartius", "Aburia Tutor", "Modia Ignatius",
    "Milphidippa Mico", "Maelia Lucanus", "Didia Vergilius", "Spuria Arcadius",
    "Suedia Papinian", "Rutilia Frumentius", "Pomponia Herculius", "Titiedia Hilaris",
    "Ampelisca Ventor", "Duccia Viator", "Nemetoria Trupo", "Cocceia Maius", "Rufria Frugius",
    "Sennia Opilio", "Rusonia Fidelis", "Secundia Sebastius", "Minicia Rector",
    "Bucculeia Constans", "Cluilia Cremutius", "Caepasia Caldus", "Carvilia Cencius",
    "Aquillia Bonus", "Caedicia Naso", "Faenia Martius", "Attia Senecio", "Cocceia Publicus",
    "Otacilia Ambrosius", "Urgulania Dalmatius", "Fulcinia Valens", "Gratidia Firmus",
    "Caedicia Papus", "Bantia Auspex", "Septia Tarquinius", "Peltrasia Maursus",
    "Rutilia Nazarius", "Vipstana Scipio", "Mallia Turpilius", "Viridia Carnifex",
    "Artoria Albani", "Minicia Tiberinus", "Canuleia Florens", "Metilia Fronto",
    "Curtia Italicus", "Liburnia Luccius", "Annia Vitus", "Cantilia Burcanius",
    "Plautia Naevius", "Seia Hortensius", "Cocceia Fabius", "Augustina Sisinnius",
    "Lucia Afer", "Sornatia Vettonius", "Angela Congrio", "Calventia Fadus",
    "Tertinia Figulus", "Dillia Leon", "Sestia Lucius", "Vitruvia Pacatius", "Curia Minicius",
    "Papiria Pomponius", "Julia Pratensis", "Caeparia Plautus", "Babudia Geminius",
    "Grania Tertulus", "Fufia Marcallas", "Norbana Sudrenus", "Caesonia Lupercus",
    "Tertinia Surinus", "Aquillia Trogus", "Lafrenia Carbo", "Festinia Iavolenus",
    "Pontia Claudius", "Cominia Symphorian", "Lucceia Novellius", "Baebia Tertius",
    "Epidia Licinius", "Vassenia Lucan", "Manlia Nabor", "Vibidia Marcellinus",
    "Munia Novation", "Caepasia Sisenna", "Quinctia Metunus", "Volusia Gratian",
    "Allectia Eumenius", "Titiedia Zeno", "Artoria Meminius", "Titinia Hermina",
    "Bruttia Palicamus", "Murria Latinius", "Pompilia Sura", "Dionysia Osterius",
    "Cominia Elvorix", "Lucretia Iavolenus", "Pontidia Sisinnius", "Cluntia Curio",
    "Urgulania Super", "Dillia Lupinus", "Floridia Superbus", "Floronia Ulixes",
    "Hortensia Alethius", "Icilia Quintilius", "Baebia Crispian", "Vatinia Tullius",
    "Calpurnia Bonifatius", "Labiena Fimbria", "Festinia Asina", "Canidia Mercurialis",
    "Aquillia Telesinus", "Petellia Typhoeus", "Papinia Siricus", "Papia Genesius",
    "Septia Carnifex", "Ummidia Verus", "Faleria Tremellius", "Sidonia Sylvius",
    "Albatia Pulcherius", "Maximia Pachomius", "Juventia Habitus", "Sallustia Sacerdos",
    "Arria Hesychius", "Sentia Verrucosis", "Amatia Scato", "Ampelisca Panaetius",
    "Caecia Catius", "Tremellia Valerian", "Floronia Zosimus", "Gratidia Rufinius",
    "Papia Maximian", "Placidia Dubitatius", "Secundia Sympronian", "Uulia Porphyrius",
    "Duronia Pacatius", "Volusena Sentius", "Manilia Musicus", "Opsia Scaevola",
    "Hirtia Scribonius", "Sempronia Gryllus", "Atria Pelagius", "Atronia Peregrinus",
    "Herennia Laurentius", "Alcesimus Nabor", "Ludovicus Capiton", "Pius Messala",
    "Turbalio Galenus", "Henricus Fortunatus", "Lyco Balduinus", "Peniculus Pudentius",
    "Lystiteles Tertullian", "Periplectomenus Frigidian", "Gallicles Limetanus",
    "Sceledrus Romulius", "Dordalus Tiburtius", "Cario Eutherius", "Dinia Christius",
    "Cleareta Symmachus", "Sphaerio Ulfila", "Adulescens Ennodius", "Artamo Typhoeus",
    "Lorarii Fuscus", "Chrysalus Ancus", "Aristophontes Iustinius", "Petrus Paratus",
    "Philoxenus Papinian", "Milphio Zeno", "Delphium Perperna", "Sparax Victricius",
    "Philto Evodius", "Sceledrus Vedrix", "Cyamus Regulus", "Lyco Toutius",
    "Stadius Pantensus", "Sergius Verullus", "Philocomasium Spendius", "Augustinus Allectus",
    "Demaenetus Musa", "Advocati Censorinus", "Cario Eugenus", "Ballio Venantius",
    "Lena Tibullus", "Crocotium Gallio",
];

/// Draw `number` distinct labels in random order.
///
/// Asking for more labels than the pool holds is not an error: a warning is
/// logged and the whole pool is returned, shuffled.
pub fn random_labels(number: usize) -> Vec<&'static str> {
    random_labels_with_rng(&mut rand::thread_rng(), number)
}

pub fn random_labels_with_rng<R: Rng + ?Sized>(rng: &mut R, number: usize) -> Vec<&'static str> {
    if number > LABEL_POOL_SIZE {
        log::warn!(
            "The random label generator only supports at most {LABEL_POOL_SIZE} labels, {number} were requested."
        );
    }
    let mut labels = LABEL_POOL.to_vec();
    labels.shuffle(rng);
    labels.truncate(number);
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_pool_labels_are_distinct_and_two_part() {
        let unique: HashSet<_> = LABEL_POOL.iter().collect();
        assert_eq!(unique.len(), LABEL_POOL_SIZE);
        for label in LABEL_POOL {
            assert_eq!(label.split(' ').count(), 2, "{label}");
        }
    }

    #[test]
    fn test_same_seed_same_labels() {
        let first = random_labels_with_rng(&mut StdRng::seed_from_u64(7), 10);
        let second = random_labels_with_rng(&mut StdRng::seed_from_u64(7), 10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_labels() {
        assert!(random_labels(0).is_empty());
    }
}
